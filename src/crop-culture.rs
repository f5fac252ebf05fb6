use image::GenericImageView;

const INPUT_PATH: &str = "public/assets/corporate-culture-rows.png";
const OUTPUT_DIR: &str = "public/assets";

/// Which half of each row holds the illustration. The section layout
/// alternates image placement, starting with an image on the right.
const ROWS: [(&str, Half); 4] = [
    ("culture-social.png", Half::Right),
    ("culture-talent.png", Half::Left),
    ("culture-thanksgiving.png", Half::Right),
    ("culture-exercise.png", Half::Left),
];

#[derive(Clone, Copy, PartialEq, Debug)]
enum Half {
    Left,
    Right,
}

fn main() {
    if let Err(error) = run() {
        println!("Error: {error}");
    }
}

fn run() -> anyhow::Result<()> {
    let image = image::open(INPUT_PATH)?;
    let (width, height) = image.dimensions();

    for (row, (name, half)) in ROWS.iter().enumerate() {
        let (left, top, right, bottom) = row_rect(width, height, row as u32, *half);

        image
            .crop_imm(left, top, right - left, bottom - top)
            .save(format!("{OUTPUT_DIR}/{name}"))?;
    }

    println!("Saved 4 culture images.");

    Ok(())
}

/// Crop rectangle (left, top, right, bottom) for the illustration half of the
/// given row. Rows are H/4 tall; any remainder rows below the fourth band are
/// dropped.
fn row_rect(width: u32, height: u32, row: u32, half: Half) -> (u32, u32, u32, u32) {
    let row_height = height / 4;

    let (left, right) = match half {
        Half::Left => (0, width / 2),
        Half::Right => (width / 2, width),
    };

    (left, row * row_height, right, (row + 1) * row_height)
}
