use crate::constants::STARS_ID;
use crate::dom;
use crate::style;
use love_core::generate_starfield;
use rand::Rng;
use web_sys as web;

/// Fill `#stars-container` once; stars are never touched again.
pub fn populate<R: Rng + ?Sized>(
    document: &web::Document,
    is_mobile: bool,
    rng: &mut R,
) -> anyhow::Result<usize> {
    let container = dom::element_by_id::<web::HtmlElement>(document, STARS_ID)?;
    let stars = generate_starfield(is_mobile, rng);
    for star in &stars {
        let el = dom::create_div(document, &star.class_name())?;
        dom::set_style(&el, "left", &style::percent(star.left_pct));
        dom::set_style(&el, "top", &style::percent(star.top_pct));
        dom::set_style(&el, "animation-delay", &style::seconds(star.delay_sec));
        _ = container.append_child(&el);
    }
    Ok(stars.len())
}
