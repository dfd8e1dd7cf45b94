//! DOM writer for the floating love phrases.
//!
//! Owns the `#ui` container and one handle pair per element. The descriptors
//! come from `love_core::elements`; this module only mirrors them into
//! nodes and inline animation styles.

use crate::constants::*;
use crate::dom;
use crate::style;
use love_core::{apply_speed, generate_elements, DecorativeElement, PlayState, ShowConfig};
use rand::rngs::StdRng;
use web_sys as web;

struct ElementNodes {
    horizontal: web::HtmlElement,
    vertical: web::HtmlElement,
}

impl ElementNodes {
    fn handles(&self) -> [&web::HtmlElement; 2] {
        [&self.horizontal, &self.vertical]
    }
}

pub struct LoveStage {
    document: web::Document,
    container: web::HtmlElement,
    config: ShowConfig,
    elements: Vec<DecorativeElement>,
    nodes: Vec<ElementNodes>,
    play_state: PlayState,
    rng: StdRng,
}

impl LoveStage {
    pub fn new(document: &web::Document, config: ShowConfig, rng: StdRng) -> anyhow::Result<Self> {
        let container = dom::element_by_id::<web::HtmlElement>(document, CONTAINER_ID)?;
        let mut stage = Self {
            document: document.clone(),
            container,
            config,
            elements: Vec::new(),
            nodes: Vec::new(),
            play_state: PlayState::Running,
            rng,
        };
        stage.regenerate()?;
        Ok(stage)
    }

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }

    /// Clear the container and build a fresh pool with new phrases.
    pub fn regenerate(&mut self) -> anyhow::Result<()> {
        self.container.set_inner_html("");
        self.nodes.clear();
        self.elements = generate_elements(
            self.config.element_count(),
            self.config.speed(),
            &mut self.rng,
        );
        for el in &self.elements {
            let (love, nodes) = build_element(&self.document, el, self.play_state)?;
            _ = self.container.append_child(&love);
            self.nodes.push(nodes);
        }
        log::info!("[stage] {} elements", self.nodes.len());
        Ok(())
    }

    pub fn set_play_state(&mut self, state: PlayState) {
        self.play_state = state;
        for nodes in &self.nodes {
            for h in nodes.handles() {
                dom::set_style(h, "animation-play-state", state.as_css());
            }
        }
    }

    pub fn toggle_play_state(&mut self) {
        self.set_play_state(self.play_state.toggled());
    }

    /// Rejects non-positive or non-finite speeds and leaves the stage as is.
    pub fn set_speed(&mut self, speed: f32) -> anyhow::Result<()> {
        self.config.set_speed(speed)?;
        apply_speed(&mut self.elements, speed);
        for (el, nodes) in self.elements.iter().zip(&self.nodes) {
            apply_timing(el, nodes);
        }
        log::info!("[stage] speed {:.2}", speed);
        Ok(())
    }

    pub fn apply_scale(&self, scale: f32) {
        dom::set_style(&self.container, "transform", &style::scale_transform(scale));
    }
}

fn apply_timing(el: &DecorativeElement, nodes: &ElementNodes) {
    dom::set_style(
        &nodes.horizontal,
        "animation-duration",
        &style::millis(el.timing.horizontal_ms),
    );
    dom::set_style(
        &nodes.vertical,
        "animation-duration",
        &style::millis(el.timing.vertical_ms),
    );
}

fn build_element(
    document: &web::Document,
    el: &DecorativeElement,
    play_state: PlayState,
) -> anyhow::Result<(web::HtmlElement, ElementNodes)> {
    let love = dom::create_div(document, LOVE_CLASS)?;
    dom::set_style(&love, "--index", &el.index.to_string());
    let horizontal = dom::create_div(document, HORIZONTAL_CLASS)?;
    let vertical = dom::create_div(document, VERTICAL_CLASS)?;
    let word_class = if el.special {
        format!("{} {}", WORD_CLASS, SPECIAL_CLASS)
    } else {
        WORD_CLASS.to_string()
    };
    let word = dom::create_div(document, &word_class)?;
    word.set_text_content(Some(&el.text));

    let nodes = ElementNodes {
        horizontal,
        vertical,
    };
    let delay = style::millis(el.delay_ms);
    for h in nodes.handles() {
        dom::set_style(h, "animation-delay", &delay);
        dom::set_style(h, "animation-play-state", play_state.as_css());
    }
    apply_timing(el, &nodes);

    _ = nodes.vertical.append_child(&word);
    _ = nodes.horizontal.append_child(&nodes.vertical);
    _ = love.append_child(&nodes.horizontal);
    Ok((love, nodes))
}
