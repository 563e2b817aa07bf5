use crate::{browser::{PageRenderer, config::LaunchOptions},
            error::{InspectorError, Result}};
use headless_chrome::{Browser, Tab};
use std::{ffi::OsStr, sync::Arc, time::Duration};

const BODY_MARKUP_JS: &str = "document.body ? document.body.innerHTML : ''";

/// Page renderer backed by a Chrome/Chromium instance
pub struct BrowserSession {
    /// The underlying headless_chrome Browser instance
    browser: Browser,

    /// The single tab pages are rendered in
    tab: Arc<Tab>,
}

impl BrowserSession {
    /// Launch a new browser instance with the given options
    pub fn launch(options: LaunchOptions) -> Result<Self> {
        let mut launch_opts = headless_chrome::LaunchOptions::default();

        launch_opts.ignore_default_args.push(OsStr::new("--enable-automation"));
        launch_opts.args.push(OsStr::new("--disable-blink-features=AutomationControlled"));

        // Inspection sessions are interactive; keep the browser alive between questions
        launch_opts.idle_browser_timeout = Duration::from_secs(60 * 60);

        launch_opts.headless = options.headless;
        launch_opts.window_size = Some((options.window_width, options.window_height));
        launch_opts.sandbox = options.sandbox;

        if let Some(path) = options.chrome_path {
            launch_opts.path = Some(path);
        }

        if let Some(dir) = options.user_data_dir {
            launch_opts.user_data_dir = Some(dir);
        }

        let browser = Browser::new(launch_opts).map_err(|e| InspectorError::LaunchFailed(e.to_string()))?;

        let tab = browser
            .new_tab()
            .map_err(|e| InspectorError::LaunchFailed(format!("Failed to create tab: {}", e)))?;

        log::info!("Browser launched (headless: {})", options.headless);
        Ok(Self { browser, tab })
    }

    /// Launch a browser with default options
    pub fn new() -> Result<Self> {
        Self::launch(LaunchOptions::default())
    }

    /// Get the tab pages are rendered in
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Get the underlying Browser instance
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Navigate to a URL without waiting for the load to finish
    pub fn navigate(&self, url: &str) -> Result<()> {
        self.tab
            .navigate_to(url)
            .map_err(|e| InspectorError::NavigationFailed(format!("Failed to navigate to {}: {}", url, e)))?;

        Ok(())
    }

    /// Wait for navigation to complete
    pub fn wait_for_navigation(&self) -> Result<()> {
        self.tab
            .wait_until_navigated()
            .map_err(|e| InspectorError::NavigationFailed(format!("Navigation timeout: {}", e)))?;

        Ok(())
    }

    /// Evaluate a script in the page and return its string result
    pub fn evaluate_string(&self, script: &str) -> Result<String> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| InspectorError::EvaluationFailed(e.to_string()))?;

        let value = result
            .value
            .ok_or_else(|| InspectorError::EvaluationFailed("No value returned from script".to_string()))?;

        match value {
            serde_json::Value::String(s) => Ok(s),
            other => Err(InspectorError::EvaluationFailed(format!("Expected a string, got {}", other))),
        }
    }
}

impl PageRenderer for BrowserSession {
    fn load(&mut self, url: &str) -> Result<()> {
        self.navigate(url)?;
        self.wait_for_navigation()?;
        log::info!("Loaded {}", url);
        Ok(())
    }

    fn body_markup(&self) -> Result<String> {
        self.evaluate_string(BODY_MARKUP_JS)
    }

    fn current_url(&self) -> Option<String> {
        Some(self.tab.get_url())
    }
}
