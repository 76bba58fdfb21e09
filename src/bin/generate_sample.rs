//! Writes a canonical sample dataset to `data/measurements.csv`: three
//! measurement rows of 200 points each — one trending, one seasonal, one
//! stationary noise — in scientific notation.

use std::f64::consts::PI;

/// Minimal deterministic PRNG (xoshiro256**).
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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let n = 200;

    // Variable1: upward drift with noise (non-stationary).
    let trending: Vec<f64> = (0..n)
        .map(|i| 1.2e-3 + 4.0e-6 * i as f64 + rng.gauss(0.0, 5.0e-5))
        .collect();

    // Variable2: seasonal oscillation, period 25 points.
    let seasonal: Vec<f64> = (0..n)
        .map(|i| 2.0e-3 + 2.0e-4 * (2.0 * PI * i as f64 / 25.0).sin() + rng.gauss(0.0, 3.0e-5))
        .collect();

    // Variable3: stationary noise around a constant level.
    let noise: Vec<f64> = (0..n).map(|_| rng.gauss(2.8e-3, 1.0e-4)).collect();

    let output_path = "data/measurements.csv";
    std::fs::create_dir_all("data")?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;
    for row in [&trending, &seasonal, &noise] {
        let record: Vec<String> = row.iter().map(|v| format!("{v:.6e}")).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;

    println!("Wrote 3 variables with {n} measurements each to {output_path}");
    Ok(())
}
