use crate::carousel::{hero_images, HeroCarousel};
use crate::commands::{Out, Session};
use crate::overview::style;
use crate::Result;
use anyhow::Context;

/// Prints the header image of the current theme, then each following image as the carousel
/// advances, `ticks` times.
pub async fn slideshow(session: &Session, ticks: u32) -> Result<Out<Vec<String>>> {
    let painter = session.painter();
    let carousel = HeroCarousel::start(
        hero_images(session.prefs().theme()),
        session.config().hero_interval(),
    )?;
    let mut index = carousel.subscribe();
    let mut shown = Vec::new();
    if let Some(image) = carousel.current_image() {
        println!("{}", painter.paint(image, style::MUTED));
        shown.push(image.to_string());
    }
    for _ in 0..ticks {
        index
            .changed()
            .await
            .context("The header images stopped rotating")?;
        let ix = *index.borrow_and_update();
        if let Some(image) = carousel.images().get(ix) {
            println!("{}", painter.paint(image, style::MUTED));
            shown.push(image.clone());
        }
    }
    carousel.stop();
    Ok(Out::new(format!("Showed {} images", shown.len()), shown))
}
