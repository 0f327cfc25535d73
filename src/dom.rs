//! Browser side of the yard: element lookup, radio injection, listeners.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlCanvasElement, HtmlElement, HtmlInputElement, HtmlLabelElement,
    window,
};

use crate::adjust::PositionAdjust;
use crate::config::YardConfig;
use crate::scene::{self, Surfaces};
use crate::selector::{ModeSelector, OptionDescriptor};
use crate::style::Style;
use crate::yard::{Stage, Yard};

/// Every element the yard needs, resolved without touching the page.
pub struct PageElements {
    pub body: HtmlElement,
    pub header_canvas: HtmlCanvasElement,
    pub ground_canvas: HtmlCanvasElement,
    pub container: Element,
    pub toggle: Element,
}

impl PageElements {
    pub fn resolve(doc: &Document, config: &YardConfig) -> Result<Self, JsValue> {
        Ok(Self {
            body: doc
                .body()
                .ok_or_else(|| JsValue::from_str("document has no body"))?,
            header_canvas: element(doc, config.header_canvas_id)?.dyn_into()?,
            ground_canvas: element(doc, config.ground_canvas_id)?.dyn_into()?,
            container: element(doc, config.select_id)?,
            toggle: element(doc, config.toggle_id)?,
        })
    }
}

/// [`Stage`] backed by the page's body, canvases and generated radio inputs.
pub struct DomStage {
    body: HtmlElement,
    surfaces: Surfaces,
    options: Vec<(Style, HtmlInputElement)>,
}

impl DomStage {
    /// Build the canvas contexts, then add one radio input + label per
    /// descriptor to the option container. Inputs already on the page under the
    /// same id are reused rather than duplicated.
    pub fn attach(
        doc: &Document,
        page: &PageElements,
        descriptors: &[OptionDescriptor],
    ) -> Result<Self, JsValue> {
        let surfaces = Surfaces::new(page.header_canvas.clone(), page.ground_canvas.clone())?;

        let mut options = Vec::with_capacity(descriptors.len());
        for d in descriptors {
            let input: HtmlInputElement = match doc.get_element_by_id(&d.id) {
                Some(existing) => existing.dyn_into()?,
                None => {
                    let input: HtmlInputElement = doc.create_element("input")?.dyn_into()?;
                    input.set_type("radio");
                    input.set_id(&d.id);
                    input.set_name(d.group);
                    input.set_value(d.value);
                    page.container.append_child(&input)?;

                    let label: HtmlLabelElement = doc.create_element("label")?.dyn_into()?;
                    label.set_html_for(&d.id);
                    label.set_text_content(Some(d.label));
                    page.container.append_child(&label)?;
                    input
                }
            };
            options.push((d.style, input));
        }

        Ok(Self {
            body: page.body.clone(),
            surfaces,
            options,
        })
    }

    fn inputs(&self) -> impl Iterator<Item = &(Style, HtmlInputElement)> {
        self.options.iter()
    }
}

impl Stage for DomStage {
    fn set_mode(&mut self, style: Style) {
        self.body.set_class_name(style.name());
    }

    fn draw_scene(&mut self, style: Style, sprite: &PositionAdjust) {
        match style {
            Style::Daytime => scene::draw_daytime_yard(&mut self.surfaces, sprite),
            Style::Evening => scene::draw_evening_yard(&mut self.surfaces, sprite),
            Style::Night => scene::draw_night_yard(&mut self.surfaces, sprite),
        }
    }

    fn redraw_sprite(&mut self, sprite: &PositionAdjust) {
        scene::redraw_sprites(&self.surfaces, sprite);
    }

    fn check_option(&mut self, style: Style) {
        for (s, input) in self.inputs() {
            input.set_checked(*s == style);
        }
    }
}

fn element(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

thread_local! {
    static YARD: RefCell<Option<Yard<DomStage>>> = RefCell::new(None);
}

/// Run `f` against the wired yard; `None` before [`wire_page`] succeeded.
pub fn with_yard<R>(f: impl FnOnce(&mut Yard<DomStage>) -> R) -> Option<R> {
    YARD.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Build the option list, register listeners and paint the initial scene.
///
/// All elements are looked up before the page is modified, and the yard only
/// becomes reachable from the listeners once everything else succeeded.
pub fn wire_page(config: YardConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let page = PageElements::resolve(&doc, &config)?;

    if YARD.with(|cell| cell.borrow().is_some()) {
        log::warn!("yard already wired, ignoring");
        return Ok(());
    }

    let selector = ModeSelector::new(&Style::ALL, config.option_group).map_err(to_js)?;
    let descriptors = selector.option_descriptors();
    let stage = DomStage::attach(&doc, &page, &descriptors)?;
    let inputs: Vec<(Style, HtmlInputElement)> = stage.inputs().cloned().collect();
    let mut yard = Yard::new(stage, selector, &config).map_err(to_js)?;

    // Option change -> full render of that style
    for (style, input) in inputs {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            with_yard(|y| y.on_option_change(style));
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Header clicks cycle through the styles
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_yard(|y| y.on_toggle_activate());
        }) as Box<dyn FnMut(_)>);
        page.toggle
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Sprite nudging + style hotkeys
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let key = evt.key();
            let shift = evt.get_modifier_state("Shift");
            with_yard(|y| y.handle_key(&key, shift));
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let utc_hour = js_sys::Date::new_0().get_utc_hours();
    yard.initial_render(utc_hour);
    YARD.with(|cell| cell.replace(Some(yard)));
    log::info!("yard wired with {} options", descriptors.len());
    Ok(())
}

fn to_js(e: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{e:#}"))
}

/// Wire now if the page has finished loading, otherwise on the window `load` event.
pub fn wire_on_load(config: YardConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if doc.ready_state() == "complete" {
        return wire_page(config);
    }
    let mut pending = Some(config);
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        if let Some(config) = pending.take() {
            if let Err(e) = wire_page(config) {
                wasm_bindgen::throw_val(e);
            }
        }
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
