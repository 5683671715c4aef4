//! The lifecycle every view shares.
//!
//! A view is built in three steps: [`mount`] instantiates its template and
//! attaches the root element to a host, the view's constructor looks up the
//! parts it needs, and then [`Component::configure`] and
//! [`Component::render_content`] run once each. [`mount_component`] performs
//! the whole sequence.
//!
//! A missing template, host, or required part is fatal: the caller gets a
//! [`ComponentError`] and no half-built view.

use thiserror::Error;

use crate::dom::{Document, Element, InsertPosition};

/// Errors raised while constructing a view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("template '{0}' not found")]
    TemplateNotFound(String),

    #[error("host element '{0}' not found")]
    HostNotFound(String),

    #[error("template '{0}' has no root element")]
    EmptyTemplate(String),

    #[error("template '{template}' has no element matching '{selector}'")]
    MissingPart { template: String, selector: String },
}

/// The two hooks every view implements.
pub trait Component {
    /// Wires event listeners and store subscriptions. Called once.
    fn configure(&mut self);

    /// Fills the root element from current state. May be called repeatedly.
    fn render_content(&mut self);
}

/// Where and how to attach a new view.
#[derive(Debug, Clone, Copy)]
pub struct MountOptions<'a> {
    pub template_id: &'a str,
    pub host_id: &'a str,
    /// `true` attaches as the host's first child, `false` as its last.
    pub insert_at_start: bool,
    pub element_id: Option<&'a str>,
}

/// The result of [`mount`]: the host and the view's freshly attached root.
#[derive(Debug, Clone)]
pub struct Mounted {
    pub template_id: String,
    pub host: Element,
    pub element: Element,
}

impl Mounted {
    /// Looks up a required part of the view's markup.
    pub fn part(&self, selector: &str) -> Result<Element, ComponentError> {
        self.element
            .query_selector(selector)
            .ok_or_else(|| ComponentError::MissingPart {
                template: self.template_id.clone(),
                selector: selector.to_string(),
            })
    }
}

/// Instantiates a template and attaches its first element to the host.
///
/// Both ids are resolved before anything is attached, so a failure leaves
/// the document untouched.
pub fn mount(document: &Document, options: &MountOptions<'_>) -> Result<Mounted, ComponentError> {
    let template = document
        .template(options.template_id)
        .ok_or_else(|| ComponentError::TemplateNotFound(options.template_id.to_string()))?;
    let host = document
        .element_by_id(options.host_id)
        .ok_or_else(|| ComponentError::HostNotFound(options.host_id.to_string()))?;

    let element = template
        .instantiate()
        .into_iter()
        .next()
        .ok_or_else(|| ComponentError::EmptyTemplate(options.template_id.to_string()))?;
    if let Some(id) = options.element_id {
        element.set_id(id);
    }

    let position = if options.insert_at_start {
        InsertPosition::AfterBegin
    } else {
        InsertPosition::BeforeEnd
    };
    host.insert_adjacent(position, element.clone());

    tracing::debug!(
        template = options.template_id,
        host = options.host_id,
        element_id = options.element_id.unwrap_or(""),
        "component mounted"
    );

    Ok(Mounted {
        template_id: options.template_id.to_string(),
        host,
        element,
    })
}

/// Mounts a view, builds it with `init`, then configures and renders it.
///
/// If `init` fails the freshly attached root is removed again.
pub fn mount_component<C, F>(
    document: &Document,
    options: &MountOptions<'_>,
    init: F,
) -> Result<C, ComponentError>
where
    C: Component,
    F: FnOnce(&Mounted) -> Result<C, ComponentError>,
{
    let mounted = mount(document, options)?;
    let mut component = match init(&mounted) {
        Ok(component) => component,
        Err(e) => {
            mounted.element.detach();
            return Err(e);
        }
    };
    component.configure();
    component.render_content();
    Ok(component)
}
