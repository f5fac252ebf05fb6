use image::GenericImageView;

const INPUT_PATH: &str = "public/assets/certificates-row.png";
const OUTPUT_DIR: &str = "public/assets/certificates";

// Certificates appear left to right in the scan.
const CERT_NAMES: [&str; 3] = ["iso14001.png", "iso45001.png", "iso9001.png"];

fn main() {
    if let Err(error) = run() {
        println!("Error: {error}");
    }
}

fn run() -> anyhow::Result<()> {
    let image = image::open(INPUT_PATH)?;
    let (width, height) = image.dimensions();

    std::fs::create_dir_all(OUTPUT_DIR)?;

    for (name, (left, right)) in CERT_NAMES.iter().zip(certificate_slices(width)) {
        image
            .crop_imm(left, 0, right - left, height)
            .save(format!("{OUTPUT_DIR}/{name}"))?;
        println!("Saved {name}");
    }

    Ok(())
}

/// Three equal-width slices as (left, right) pixel bounds, each spanning the
/// full image height. Floor division means the rightmost slice picks up any
/// remainder columns.
fn certificate_slices(width: u32) -> [(u32, u32); 3] {
    let cert_width = width / 3;

    [
        (0, cert_width),
        (cert_width, cert_width * 2),
        (cert_width * 2, width),
    ]
}
