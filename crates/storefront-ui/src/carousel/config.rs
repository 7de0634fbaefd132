//! Slider settings and the responsive breakpoint table.
//!
//! Serializes to the client slider's settings object (camelCase keys,
//! `responsive: [{breakpoint, settings}]`), which the page embeds verbatim
//! in the `data-slick` attribute.

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Slides shown when no count is requested.
pub const DEFAULT_SLIDES: u32 = 4;

/// `(max_width, cap)` pairs, widest first. `None` means one slide.
const BREAKPOINTS: [(u32, Option<u32>); 3] = [(1200, Some(3)), (992, Some(2)), (576, None)];

/// Slide counts applied below a viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideSettings {
    pub slides_to_show: u32,
    pub slides_to_scroll: u32,
}

/// One responsive override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Applies to viewports narrower than this, in CSS pixels.
    #[serde(rename = "breakpoint")]
    pub max_width: u32,
    pub settings: SlideSettings,
}

impl Breakpoint {
    pub fn new(max_width: u32, slides_to_show: u32) -> Self {
        Self {
            max_width,
            settings: SlideSettings {
                slides_to_show,
                slides_to_scroll: 1,
            },
        }
    }

    pub fn slides_to_show(&self) -> u32 {
        self.settings.slides_to_show
    }
}

/// Settings for one carousel instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    pub dots: bool,
    pub infinite: bool,
    /// Transition duration in milliseconds.
    pub speed: u32,
    pub slides_to_show: u32,
    pub slides_to_scroll: u32,
    pub autoplay: bool,
    /// Milliseconds between automatic advances.
    pub autoplay_speed: u32,
    pub responsive: Vec<Breakpoint>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::for_slides(DEFAULT_SLIDES)
    }
}

impl CarouselConfig {
    /// Settings for `slides` visible cards, with the derived breakpoint table.
    ///
    /// A request for zero slides is treated as one.
    pub fn for_slides(slides: u32) -> Self {
        let base = slides.max(1);
        Self {
            dots: true,
            infinite: true,
            speed: 500,
            slides_to_show: base,
            slides_to_scroll: 1,
            autoplay: true,
            autoplay_speed: 3000,
            responsive: breakpoints_for(base),
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool, autoplay_speed: u32) -> Self {
        self.autoplay = autoplay;
        self.autoplay_speed = autoplay_speed;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_dots(mut self, dots: bool) -> Self {
        self.dots = dots;
        self
    }

    pub fn with_slides_to_scroll(mut self, slides: u32) -> Self {
        self.slides_to_scroll = slides;
        self
    }

    /// Check slide counts and breakpoint ordering.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.slides_to_show == 0 {
            return Err(CarouselError::ZeroSlides {
                field: "slidesToShow",
            });
        }
        if self.slides_to_scroll == 0 {
            return Err(CarouselError::ZeroSlides {
                field: "slidesToScroll",
            });
        }

        let mut sorted = self.responsive.clone();
        sorted.sort_by(|a, b| b.max_width.cmp(&a.max_width));

        for bp in &sorted {
            if bp.settings.slides_to_show == 0 || bp.settings.slides_to_scroll == 0 {
                return Err(CarouselError::ZeroSlides {
                    field: "responsive.settings",
                });
            }
            if bp.slides_to_show() > self.slides_to_show {
                return Err(CarouselError::ExceedsBase {
                    max_width: bp.max_width,
                    slides: bp.slides_to_show(),
                    base: self.slides_to_show,
                });
            }
        }

        for pair in sorted.windows(2) {
            if pair[1].slides_to_show() > pair[0].slides_to_show() {
                return Err(CarouselError::NotMonotonic {
                    wider: pair[0].max_width,
                    narrower: pair[1].max_width,
                });
            }
        }

        Ok(())
    }

    /// Slides visible at `width`: the narrowest breakpoint wider than `width`
    /// wins, otherwise the base count.
    pub fn slides_for_width(&self, width: u32) -> u32 {
        self.responsive
            .iter()
            .filter(|bp| width < bp.max_width)
            .min_by_key(|bp| bp.max_width)
            .map(Breakpoint::slides_to_show)
            .unwrap_or(self.slides_to_show)
    }

    /// Settings object for the client slider.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn breakpoints_for(base: u32) -> Vec<Breakpoint> {
    BREAKPOINTS
        .iter()
        .map(|&(max_width, cap)| Breakpoint::new(max_width, cap.map_or(1, |c| base.min(c))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(config: &CarouselConfig) -> Vec<(u32, u32)> {
        config
            .responsive
            .iter()
            .map(|bp| (bp.max_width, bp.slides_to_show()))
            .collect()
    }

    #[test]
    fn test_default_table() {
        let config = CarouselConfig::default();
        assert_eq!(config.slides_to_show, 4);
        assert_eq!(shown(&config), [(1200, 3), (992, 2), (576, 1)]);
        assert!(config.dots);
        assert!(config.autoplay);
        assert_eq!(config.autoplay_speed, 3000);
        assert_eq!(config.speed, 500);
    }

    #[test]
    fn test_small_counts_never_exceed_base() {
        assert_eq!(shown(&CarouselConfig::for_slides(2)), [(1200, 2), (992, 2), (576, 1)]);
        assert_eq!(shown(&CarouselConfig::for_slides(1)), [(1200, 1), (992, 1), (576, 1)]);
        assert_eq!(CarouselConfig::for_slides(0).slides_to_show, 1);
    }

    #[test]
    fn test_derived_tables_are_monotonic() {
        for n in 1..=8 {
            let config = CarouselConfig::for_slides(n);
            assert_eq!(config.validate(), Ok(()), "slides = {n}");

            let counts: Vec<u32> = (200..=1600)
                .step_by(8)
                .map(|width| config.slides_for_width(width))
                .collect();
            assert!(counts.windows(2).all(|w| w[0] <= w[1]), "slides = {n}");
            assert!(counts.iter().all(|c| *c <= n && *c >= 1));
        }
    }

    #[test]
    fn test_slides_for_width() {
        let config = CarouselConfig::default();
        assert_eq!(config.slides_for_width(1440), 4);
        assert_eq!(config.slides_for_width(1199), 3);
        assert_eq!(config.slides_for_width(1000), 3);
        assert_eq!(config.slides_for_width(991), 2);
        assert_eq!(config.slides_for_width(700), 2);
        assert_eq!(config.slides_for_width(575), 1);
        assert_eq!(config.slides_for_width(320), 1);
    }

    #[test]
    fn test_breakpoint_width_keeps_wider_count() {
        let config = CarouselConfig::default();
        assert_eq!(config.slides_for_width(1200), 4);
        assert_eq!(config.slides_for_width(992), 3);
        assert_eq!(config.slides_for_width(576), 2);
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let mut config = CarouselConfig::default();
        config.responsive[2].settings.slides_to_show = 3;
        assert_eq!(
            config.validate(),
            Err(CarouselError::NotMonotonic {
                wider: 992,
                narrower: 576
            })
        );

        let mut config = CarouselConfig::for_slides(2);
        config.responsive[0].settings.slides_to_show = 3;
        assert!(matches!(
            config.validate(),
            Err(CarouselError::ExceedsBase { max_width: 1200, .. })
        ));

        let config = CarouselConfig::default().with_slides_to_scroll(0);
        assert!(matches!(config.validate(), Err(CarouselError::ZeroSlides { .. })));
    }

    #[test]
    fn test_settings_contract() {
        let json: serde_json::Value =
            serde_json::from_str(&CarouselConfig::default().to_json()).unwrap();
        assert_eq!(json["slidesToShow"], 4);
        assert_eq!(json["autoplaySpeed"], 3000);
        assert_eq!(json["responsive"][0]["breakpoint"], 1200);
        assert_eq!(json["responsive"][0]["settings"]["slidesToShow"], 3);
        assert_eq!(json["responsive"][2]["settings"]["slidesToScroll"], 1);
    }
}
