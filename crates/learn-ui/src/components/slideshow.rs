//! Slide carousel
//!
//! Attaches to the first `.slideshow` on the page. The track is shifted by
//! whole slide widths; prev/next wrap around and one dot per slide jumps
//! straight to it.

use std::cell::RefCell;
use std::rc::Rc;

use learn_core::{Carousel, LearnConfig, ResultExt};
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{self, Scope, markers};
use crate::error::{DomError, DomResult};

/// Navigation request from a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
    Jump(usize),
}

/// Slideshow bound to its track, counter and generated dots.
pub struct SlideshowWidget {
    track: HtmlElement,
    counter: Option<Element>,
    dots: Vec<Element>,
    carousel: RefCell<Carousel>,
    active_class: String,
}

impl SlideshowWidget {
    /// Build the slideshow, or `Ok(None)` when the page has no container,
    /// no track or no slides.
    ///
    /// # Errors
    ///
    /// Returns an error if a query, element creation or listener
    /// registration throws.
    pub fn attach(document: &Document, config: &LearnConfig) -> DomResult<Option<Rc<Self>>> {
        let Some(root) = Scope::Document(document).query(markers::SLIDESHOW)? else {
            return Ok(None);
        };
        let scope = Scope::Element(&root);

        let Some(track) = scope.query_html(markers::TRACK)? else {
            tracing::debug!("Slideshow has no track");
            return Ok(None);
        };
        let slide_count = scope.query_all(markers::SLIDE)?.len();
        let Ok(carousel) = Carousel::new(slide_count) else {
            tracing::debug!("Slideshow has no slides");
            return Ok(None);
        };

        let dots = match scope.query(markers::DOTS)? {
            Some(container) => create_dots(document, &container, slide_count, config)?,
            None => Vec::new(),
        };

        let widget = Rc::new(Self {
            track,
            counter: scope.query(markers::COUNTER)?,
            dots,
            carousel: RefCell::new(carousel),
            active_class: config.active_class.clone(),
        });

        for (index, dot) in widget.dots.iter().enumerate() {
            let handle = Rc::clone(&widget);
            dom::listen(dot, "click", move |_| {
                handle.go(Step::Jump(index));
            })?;
        }
        for (selector, step) in [(markers::PREV, Step::Prev), (markers::NEXT, Step::Next)] {
            if let Some(button) = scope.query(selector)? {
                let handle = Rc::clone(&widget);
                dom::listen(&button, "click", move |_| {
                    handle.go(step);
                })?;
            }
        }

        widget.render();
        tracing::info!(slides = slide_count, "Slideshow attached");
        Ok(Some(widget))
    }

    /// Apply a navigation step and re-render. Returns the new index.
    pub fn go(&self, step: Step) -> usize {
        let index = {
            let mut carousel = self.carousel.borrow_mut();
            match step {
                Step::Prev => carousel.prev(),
                Step::Next => carousel.next(),
                Step::Jump(index) => carousel.jump(index).or_default_logged(carousel.index()),
            }
        };
        self.render();
        index
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.carousel.borrow().index()
    }

    #[must_use]
    pub fn dots(&self) -> &[Element] {
        &self.dots
    }

    fn render(&self) {
        let carousel = *self.carousel.borrow();

        if let Err(e) = dom::set_style(&self.track, "transform", &carousel.track_transform()) {
            tracing::warn!("Failed to move slideshow track: {}", e);
        }
        if let Some(counter) = &self.counter {
            dom::set_text(counter, &carousel.counter_text());
        }
        for (index, dot) in self.dots.iter().enumerate() {
            if let Err(e) = dot
                .class_list()
                .toggle_with_force(&self.active_class, carousel.is_active(index))
            {
                tracing::warn!("Failed to toggle dot {}: {:?}", index, e);
            }
        }
    }
}

/// One `<button class="slide-dot">` per slide, appended to `container`.
fn create_dots(
    document: &Document,
    container: &Element,
    count: usize,
    config: &LearnConfig,
) -> DomResult<Vec<Element>> {
    (0..count)
        .map(|index| -> DomResult<Element> {
            let dot = document
                .create_element("button")
                .map_err(|e| DomError::CreateFailed {
                    tag: "button".to_string(),
                    reason: crate::error::describe_js(&e),
                })?;
            dot.set_class_name(&config.dot_class);
            dot.set_attribute("type", "button")
                .and_then(|()| dot.set_attribute("aria-label", &config.dot_label(index)))
                .map_err(|e| DomError::operation_failed("setAttribute", &e))?;
            container
                .append_child(&dot)
                .map_err(|e| DomError::operation_failed("appendChild", &e))?;
            Ok(dot)
        })
        .collect()
}
