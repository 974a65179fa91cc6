use anyhow::{Context, Result};

const INDUSTRIES: &[&str] = &[
    "Fintech",
    "Healthtech",
    "AI",
    "Climate",
    "Edtech",
    "Proptech",
    "Cybersecurity",
    "Retail",
    "Logistics",
    "Biotech",
];

const BUZZWORDS: &[&str] = &[
    "Machine Learning",
    "SaaS",
    "B2B",
    "Marketplace",
    "Sustainability",
    "Blockchain",
    "Growth",
    "Deep Tech",
    "Open Banking",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Pick `k` entries (repeats allowed) and join them the way exports do,
    /// with uneven spacing around the commas.
    fn tag_cell(&mut self, pool: &[&str], k: usize) -> String {
        (0..k)
            .map(|_| {
                let tag = pool[self.below(pool.len())];
                if self.next_f64() < 0.3 {
                    format!("  {tag} ")
                } else {
                    tag.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let output_path = "sample_companies.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record([
        "(Company) Name",
        "(Company) Industries",
        "(Company) Buzzwords",
        "Amount raised (converted to GBP)",
    ])?;

    let n_companies = 200;
    for i in 0..n_companies {
        let industries = match rng.below(8) {
            0 => String::new(),
            k => rng.tag_cell(INDUSTRIES, 1 + k % 3),
        };
        let buzzwords = match rng.below(6) {
            0 => String::new(),
            k => rng.tag_cell(BUZZWORDS, k % 4),
        };
        // Log-uniform between £10k and £500m, with some rounds undisclosed.
        let amount = if rng.next_f64() < 0.15 {
            String::new()
        } else {
            let exponent = 4.0 + rng.next_f64() * 4.7;
            format!("{:.0}", 10f64.powf(exponent))
        };

        writer.write_record([
            format!("Company {i:03}"),
            industries,
            buzzwords,
            amount,
        ])?;
    }
    writer.flush().context("flushing output file")?;

    println!("Wrote {n_companies} companies to {output_path}");
    Ok(())
}
