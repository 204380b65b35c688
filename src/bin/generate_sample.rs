//! Generate sample distributor stock files for manual testing:
//! two valid files (one .xlsx, one .csv) and one with a missing column.
//!
//! Usage: `cargo run --bin generate_sample [output_dir]`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

const COLUMNS: [&str; 6] = ["No", "Distributor", "Kategori", "Nama Barang", "Stok", "Harga"];

const KATEGORI: [&str; 4] = ["Minuman", "Makanan", "Sabun", "Alat Tulis"];

const BARANG: [(&str, &str); 8] = [
    ("Kopi Bubuk 250g", "Minuman"),
    ("Teh Celup Isi 25", "Minuman"),
    ("Mie Instan Goreng", "Makanan"),
    ("Biskuit Kaleng", "Makanan"),
    ("Sabun Mandi Batang", "Sabun"),
    ("Sampo Sachet", "Sabun"),
    ("Pulpen Hitam", "Alat Tulis"),
    ("Buku Tulis 38 Lembar", "Alat Tulis"),
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

    /// Uniform integer in `lo..=hi`.
    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        let span = (hi - lo + 1) as u64;
        lo + (self.next_u64() % span) as i64
    }
}

struct Item {
    no: i64,
    kategori: String,
    nama: String,
    stok: i64,
    harga: f64,
}

fn generate_items(rng: &mut SimpleRng, count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let (nama, kategori) = BARANG[rng.range(0, BARANG.len() as i64 - 1) as usize];
            Item {
                no: i as i64 + 1,
                kategori: kategori.to_string(),
                nama: nama.to_string(),
                stok: rng.range(0, 200),
                harga: rng.range(1, 60) as f64 * 500.0,
            }
        })
        .collect()
}

fn write_xlsx(path: &Path, distributor: &str, items: &[Item], skip_harga: bool) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    let columns: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|c| !(skip_harga && *c == "Harga"))
        .collect();
    for (col, name) in columns.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }

    for (i, item) in items.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, item.no as f64)?;
        sheet.write_string(row, 1, distributor)?;
        sheet.write_string(row, 2, &item.kategori)?;
        sheet.write_string(row, 3, &item.nama)?;
        sheet.write_number(row, 4, item.stok as f64)?;
        if !skip_harga {
            sheet.write_number(row, 5, item.harga)?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn write_csv(path: &Path, distributor: &str, items: &[Item]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(COLUMNS)?;
    for item in items {
        writer.write_record([
            item.no.to_string(),
            distributor.to_string(),
            item.kategori.clone(),
            item.nama.clone(),
            item.stok.to_string(),
            item.harga.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    let a = generate_items(&mut rng, 30);
    write_xlsx(&out_dir.join("stok_distributor_a.xlsx"), "PT Maju Bersama", &a, false)?;

    let b = generate_items(&mut rng, 25);
    write_csv(&out_dir.join("stok_distributor_b.csv"), "CV Jaya Abadi", &b)?;

    // Missing the "Harga" column, for exercising the schema error path.
    let c = generate_items(&mut rng, 10);
    write_xlsx(&out_dir.join("stok_invalid.xlsx"), "UD Sumber Rejeki", &c, true)?;

    log::info!("Wrote 3 sample files to {}", out_dir.display());
    println!("Sample files written to {}", out_dir.display());
    Ok(())
}
