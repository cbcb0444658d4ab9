use html::tokenize;
use layout::{DisplayEntry, FontCache, FontProvider, LayoutError, LayoutOptions, layout};
use net::{Fetch, Location, NetError};

#[derive(Debug)]
pub enum LoadError {
    Net(NetError),
    Layout(LayoutError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Net(e) => write!(f, "{e}"),
            LoadError::Layout(e) => write!(f, "layout failed: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Net(e) => Some(e),
            LoadError::Layout(e) => Some(e),
        }
    }
}

impl From<NetError> for LoadError {
    fn from(e: NetError) -> Self {
        LoadError::Net(e)
    }
}

impl From<LayoutError> for LoadError {
    fn from(e: LayoutError) -> Self {
        LoadError::Layout(e)
    }
}

/// The currently loaded document: where it came from and its display list.
#[derive(Default)]
pub struct PageState {
    pub location: Option<Location>,
    pub display_list: Vec<DisplayEntry>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch, tokenize and lay out `url`.
    ///
    /// The page is replaced only if every phase succeeds; on error the
    /// previous document stays loaded. Returns the number of placed words.
    pub fn load<P: FontProvider>(
        &mut self,
        url: &str,
        fetcher: &dyn Fetch,
        fonts: &FontCache<P>,
        options: &LayoutOptions,
    ) -> Result<usize, LoadError> {
        let location = Location::parse(url)?;
        let body = fetcher.fetch(&location)?;
        let tokens = tokenize(&body);
        log::debug!(target: "browser.page", "{location}: {} tokens", tokens.len());
        let display_list = layout(&tokens, fonts, options)?;

        let words = display_list.len();
        self.location = Some(location);
        self.display_list = display_list;
        Ok(words)
    }

    pub fn content_height(&self) -> f32 {
        layout::content_height(&self.display_list)
    }
}
