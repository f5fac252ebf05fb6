use image::GenericImageView;

const INPUT_PATH: &str = "public/assets/social-contribution-row.png";
const OUTPUT_DIR: &str = "public/assets";

const CARD_COUNT: u32 = 6;

// Band and margin fractions tuned by eye against the section screenshot:
// the card images sit between 22% and 55% of the height, inside 1.5% side
// padding.
const BAND_TOP: f64 = 0.22;
const BAND_BOTTOM: f64 = 0.55;
const LEFT_MARGIN: f64 = 0.015;
const RIGHT_MARGIN: f64 = 0.985;

// Fixed trim per column side to cut the card's own whitespace.
const CARD_TRIM: i64 = 10;

fn main() {
    if let Err(error) = run() {
        println!("Error: {error}");
    }
}

fn run() -> anyhow::Result<()> {
    let image = image::open(INPUT_PATH)?;
    let (width, height) = image.dimensions();

    let (top, bottom) = band_bounds(height);

    for index in 0..CARD_COUNT {
        let (left, right) = card_bounds(width, index);
        let card_width = (right - left).max(0) as u32;

        image
            .crop_imm(left as u32, top, card_width, bottom - top)
            .save(format!("{OUTPUT_DIR}/social-contribution-{}.png", index + 1))?;
    }

    println!("Saved 6 social contribution images.");

    Ok(())
}

/// Vertical (top, bottom) bounds of the card band.
fn band_bounds(height: u32) -> (u32, u32) {
    let top = (f64::from(height) * BAND_TOP) as u32;
    let bottom = (f64::from(height) * BAND_BOTTOM) as u32;

    (top, bottom)
}

/// Trimmed (left, right) bounds of card `index` within the margin-trimmed
/// width. Column edges are truncated from floating-point sixths, then the
/// fixed trim is applied regardless of how wide the column actually is, so
/// a very narrow column can collapse to nothing or invert.
fn card_bounds(width: u32, index: u32) -> (i64, i64) {
    let left_margin = (f64::from(width) * LEFT_MARGIN) as i64;
    let right_margin = (f64::from(width) * RIGHT_MARGIN) as i64;
    let card_width = (right_margin - left_margin) as f64 / f64::from(CARD_COUNT);

    let left = (left_margin as f64 + f64::from(index) * card_width) as i64;
    let right = (left as f64 + card_width) as i64;

    (left + CARD_TRIM, right - CARD_TRIM)
}

#[cfg(test)]
mod tests {
    use super::{band_bounds, card_bounds, CARD_COUNT};

    #[test]
    fn band_sits_between_22_and_55_percent() {
        assert_eq!(band_bounds(1000), (220, 550));
        assert_eq!(band_bounds(799), (175, 439));
    }

    #[test]
    fn first_and_last_cards_respect_the_margins() {
        // 1200 px wide: margins at 18 and 1182, columns exactly 194 px.
        assert_eq!(card_bounds(1200, 0), (28, 202));
        assert_eq!(card_bounds(1200, 5), (998, 1172));
    }

    #[test]
    fn columns_are_monotonic_and_disjoint() {
        for width in [640, 1200, 1366, 1920, 2559] {
            let bounds: Vec<_> = (0..CARD_COUNT).map(|i| card_bounds(width, i)).collect();

            for pair in bounds.windows(2) {
                assert!(pair[0].0 < pair[1].0, "left edges must increase");
                assert!(pair[0].1 <= pair[1].0, "columns must not overlap");
            }
        }
    }

    #[test]
    fn fixed_trim_collapses_very_narrow_columns() {
        // 100 px wide: each column is ~16 px, so trimming 10 px per side
        // inverts the bounds. Kept as-is from the original heuristic.
        let (left, right) = card_bounds(100, 0);
        assert_eq!((left, right), (11, 7));
        assert!(right < left);
    }
}
