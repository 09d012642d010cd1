use image::imageops::FilterType;
use log::{debug, info};

use crate::{
    bitmap::Image,
    error::Error,
    mono::to_monochrome,
    paper::PaperWidth,
    utils::{fit_to_width, pack_rows},
    Matrix,
};

/// Runs the page to raster pipeline: fit to paper, threshold, pack.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    config: Config,
}

impl Rasterizer {
    pub fn new(config: Config) -> Self {
        Rasterizer { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rasterize a single page.
    ///
    /// With scaling enabled the page is resized to the paper width first.
    /// Otherwise it is printed at its own size, padded white on the right,
    /// and pages wider than the paper are rejected.
    pub fn render(&self, page: &Image) -> Result<Matrix, Error> {
        let dots = self.config.paper.dots();

        let mono = if self.config.scale_to_paper {
            to_monochrome(&fit_to_width(page, dots, self.config.filter)?)
        } else {
            to_monochrome(page)
        };

        let rows = pack_rows(&mono, dots)?;
        debug!("rendered {} raster lines of {} bytes", rows.len(), self.config.paper.row_bytes());
        Ok(rows)
    }

    /// Rasterize every page of a document in order.
    ///
    /// Stops at the first page that fails.
    pub fn render_pages(&self, pages: impl IntoIterator<Item = Image>) -> Result<Vec<Matrix>, Error> {
        let mut out = Vec::new();

        for (n, page) in pages.into_iter().enumerate() {
            debug!("page {} is {}x{}", n + 1, page.width(), page.height());
            match self.render(&page) {
                Ok(rows) => out.push(rows),
                Err(err) => {
                    debug!("page {} failed: {:?}", n + 1, err);
                    return Err(err);
                }
            }
        }

        info!("rasterized {} pages for {:?} paper", out.len(), self.config.paper);
        Ok(out)
    }
}

/// Config
///
#[derive(Debug, Clone, Copy)]
pub struct Config {
    paper: PaperWidth,
    scale_to_paper: bool,
    filter: FilterType,
}

impl Config {
    /// Initialize configuration data with default values.
    ///
    /// Pages are scaled to the paper width with a triangle filter.
    ///
    /// # Example
    ///
    /// ```
    /// use thermal_raster::{Config, FilterType, PaperWidth};
    ///
    /// let config = Config::new(PaperWidth::TwoInch)
    ///     .scale_to_paper(true)
    ///     .filter(FilterType::CatmullRom);
    /// assert_eq!(config.paper(), PaperWidth::TwoInch);
    /// ```
    ///
    pub fn new(paper: PaperWidth) -> Config {
        Config {
            paper,
            scale_to_paper: true,
            filter: FilterType::Triangle,
        }
    }

    pub fn scale_to_paper(self, flag: bool) -> Self {
        Config {
            scale_to_paper: flag,
            ..self
        }
    }

    pub fn filter(self, filter: FilterType) -> Self {
        Config { filter, ..self }
    }

    pub fn paper(&self) -> PaperWidth {
        self.paper
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(PaperWidth::default())
    }
}
