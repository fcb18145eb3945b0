use crate::error::{Error, Result};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

const PX_PER_INCH: f64 = 96.0;

/// HTML-to-PDF renderer backed by a headless Chromium instance.
///
/// The browser is launched lazily on the first render and shared across
/// clones; its event handler runs on a background task for the lifetime of
/// the process.
#[derive(Clone, Default)]
pub struct PdfService {
    chrome_executable: Option<String>,
    browser: Arc<OnceCell<Browser>>,
}

impl PdfService {
    pub fn new(chrome_executable: Option<String>) -> Self {
        Self {
            chrome_executable,
            browser: Arc::new(OnceCell::new()),
        }
    }

    async fn browser(&self) -> Result<&Browser> {
        self.browser
            .get_or_try_init(|| async {
                let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
                    "--disable-gpu",
                    "--no-sandbox",
                    "--disable-dev-shm-usage",
                ]);
                if let Some(path) = &self.chrome_executable {
                    builder = builder.chrome_executable(path);
                }
                let config = builder.build().map_err(Error::Internal)?;

                let (browser, mut handler) = Browser::launch(config).await?;
                tokio::spawn(async move {
                    while let Some(event) = handler.next().await {
                        if event.is_err() {
                            break;
                        }
                    }
                });
                info!("Headless browser launched for PDF rendering");
                Ok(browser)
            })
            .await
    }

    async fn load_page(&self, html: &str) -> Result<Page> {
        let browser = self.browser().await?;
        let page = browser.new_page("about:blank").await?;
        page.set_content(html).await?;
        Ok(page)
    }

    /// Render HTML into a paginated PDF with default page settings.
    pub async fn render(&self, html: &str) -> Result<Vec<u8>> {
        let page = self.load_page(html).await?;
        let params = PrintToPdfParams {
            print_background: Some(true),
            ..Default::default()
        };
        let pdf = page.pdf(params).await?;
        page.close().await?;
        Ok(pdf)
    }

    /// Render HTML onto a single continuous page sized to the document's
    /// natural dimensions (CSS pixels converted to inches at 96 dpi).
    pub async fn render_long(&self, html: &str) -> Result<Vec<u8>> {
        let page = self.load_page(html).await?;

        let width_px: f64 = page
            .evaluate(
                "Math.max(document.documentElement.scrollWidth, \
                 document.body ? document.body.scrollWidth : 0)",
            )
            .await?
            .into_value()?;
        let height_px: f64 = page
            .evaluate(
                "Math.max(document.documentElement.scrollHeight, \
                 document.body ? document.body.scrollHeight : 0)",
            )
            .await?
            .into_value()?;
        debug!(width_px, height_px, "Measured document for long-page PDF");

        let params = PrintToPdfParams {
            print_background: Some(true),
            paper_width: Some((width_px / PX_PER_INCH).max(1.0)),
            paper_height: Some((height_px / PX_PER_INCH).max(1.0)),
            margin_top: Some(0.0),
            margin_bottom: Some(0.0),
            margin_left: Some(0.0),
            margin_right: Some(0.0),
            prefer_css_page_size: Some(false),
            ..Default::default()
        };
        let pdf = page.pdf(params).await?;
        page.close().await?;
        Ok(pdf)
    }
}
