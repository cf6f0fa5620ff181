//! External collaborator contracts.
//!
//! The only stateful collaborator is the wireframe renderer, a headless
//! browser that turns HTML mock-ups into screenshots. It is long lived: it is
//! initialized once, acquired per request and closed explicitly. Document
//! synthesis treats its output as opaque image bytes and omits any capture
//! that fails.

use crate::form::{ImageSource, Wireframes};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("Renderer is not initialized")]
    NotInitialized,

    #[error("Renderer is already initialized")]
    AlreadyInitialized,

    /// The renderer failed to produce a screenshot
    #[error("Render failed: {0}")]
    Render(String),
}

/// Browser viewport of a capture, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Landscape viewport of the search view.
    pub const SEARCH: Self = Self {
        width: 1280,
        height: 800,
    };
    /// Portrait viewport of the record form.
    pub const FORM: Self = Self {
        width: 800,
        height: 1100,
    };
}

/// Renders HTML into raster image bytes.
pub trait WireframeRenderer: Send + Sync {
    fn render(&self, html: &str, viewport: Viewport) -> Result<Vec<u8>, CollaboratorError>;

    /// Release the browser. Called once by [`RenderService::shutdown`].
    fn close(&self) -> Result<(), CollaboratorError>;
}

/// Scoped owner of the process-wide renderer.
#[derive(Default)]
pub struct RenderService {
    renderer: RwLock<Option<Arc<dyn WireframeRenderer>>>,
}

static GLOBAL: Lazy<RenderService> = Lazy::new(RenderService::new);

impl RenderService {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide service.
    pub fn global() -> &'static RenderService {
        &GLOBAL
    }

    /// Install the renderer. Fails if one is already installed.
    pub fn initialize(&self, renderer: Arc<dyn WireframeRenderer>) -> Result<(), CollaboratorError> {
        let mut slot = self.renderer.write();
        if slot.is_some() {
            return Err(CollaboratorError::AlreadyInitialized);
        }
        *slot = Some(renderer);
        tracing::debug!("wireframe renderer initialized");
        Ok(())
    }

    /// A handle to the installed renderer for one request.
    pub fn acquire(&self) -> Result<Arc<dyn WireframeRenderer>, CollaboratorError> {
        self.renderer
            .read()
            .clone()
            .ok_or(CollaboratorError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.renderer.read().is_some()
    }

    /// Remove and close the renderer. A second call is a no-op.
    ///
    /// Requests that acquired the renderer earlier keep their handle until
    /// they finish.
    pub fn shutdown(&self) -> Result<(), CollaboratorError> {
        let renderer = self.renderer.write().take();
        match renderer {
            Some(renderer) => {
                tracing::debug!("closing wireframe renderer");
                renderer.close()
            }
            None => Ok(()),
        }
    }
}

fn capture(
    renderer: &dyn WireframeRenderer,
    view: &str,
    html: Option<&str>,
    viewport: Viewport,
) -> Option<ImageSource> {
    let html = html.filter(|h| !h.trim().is_empty())?;
    match renderer.render(html, viewport) {
        Ok(bytes) if !bytes.is_empty() => Some(ImageSource::Inline(bytes)),
        Ok(_) => {
            tracing::warn!(view, "renderer returned an empty capture, wireframe omitted");
            None
        }
        Err(error) => {
            tracing::warn!(view, %error, "wireframe capture failed, wireframe omitted");
            None
        }
    }
}

/// Capture the search and form views of an entity. Missing HTML, an
/// uninitialized service and failed renders all result in omission.
pub fn capture_wireframes(
    service: &RenderService,
    search_html: Option<&str>,
    form_html: Option<&str>,
) -> Wireframes {
    if search_html.is_none() && form_html.is_none() {
        return Wireframes::default();
    }
    let renderer = match service.acquire() {
        Ok(renderer) => renderer,
        Err(error) => {
            tracing::warn!(%error, "wireframes omitted");
            return Wireframes::default();
        }
    };
    Wireframes {
        search: capture(renderer.as_ref(), "search", search_html, Viewport::SEARCH),
        form: capture(renderer.as_ref(), "form", form_html, Viewport::FORM),
    }
}
