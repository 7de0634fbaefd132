//! Responsive slider table.

use anyhow::{Context as _, Result};
use storefront_ui::CarouselConfig;

use super::BreakpointsArgs;
use crate::context::Context;

/// Run the breakpoints command.
pub async fn run(args: BreakpointsArgs, ctx: &Context) -> Result<()> {
    let slides = args
        .slides
        .unwrap_or(ctx.config.storefront.carousel.slides_to_show);
    let config = CarouselConfig::for_slides(slides);
    config
        .validate()
        .with_context(|| format!("Invalid breakpoints for {} slides", slides))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "slidesToShow": config.slides_to_show,
            "responsive": config.responsive,
            "atWidth": args.width.map(|w| serde_json::json!({
                "width": w,
                "slidesToShow": config.slides_for_width(w),
            })),
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Carousel breakpoints ({} slides)", config.slides_to_show));
    let widths = [12, 6];
    ctx.output.table_row(&["below", "slides"], &widths);
    for (width, slides) in rows(&config) {
        let slides = slides.to_string();
        ctx.output.table_row(&[width.as_str(), slides.as_str()], &widths);
    }

    if let Some(width) = args.width {
        println!();
        ctx.output.kv(&format!("{}px", width), &config.slides_for_width(width).to_string());
    }

    Ok(())
}

/// Table rows, widest first, ending with the base setting.
fn rows(config: &CarouselConfig) -> Vec<(String, u32)> {
    let mut breakpoints = config.responsive.clone();
    breakpoints.sort_by(|a, b| b.max_width.cmp(&a.max_width));

    std::iter::once(("base".to_string(), config.slides_to_show))
        .chain(
            breakpoints
                .iter()
                .map(|bp| (format!("{}px", bp.max_width), bp.slides_to_show())),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_for_default_slides() {
        let rows = rows(&CarouselConfig::for_slides(4));
        assert_eq!(
            rows,
            vec![
                ("base".to_string(), 4),
                ("1200px".to_string(), 3),
                ("992px".to_string(), 2),
                ("576px".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_rows_never_exceed_base() {
        for slides in 1..=6 {
            let config = CarouselConfig::for_slides(slides);
            assert!(rows(&config).iter().all(|(_, n)| *n <= slides));
        }
    }
}
