use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{design_focus_label, opportunities_label, Submission};

/// How many entries a random draw picks for the weekly feature.
pub const DRAW_SIZE: usize = 5;

/// Draw up to five distinct entries from the given view, uniformly.
///
/// A Fisher-Yates partial shuffle over the view; the prefix of length
/// `min(5, n)` is the draw. Presentational lottery, not security-sensitive.
pub fn draw<'a>(view: &[&'a Submission]) -> Vec<&'a Submission> {
    draw_with(view, &mut rand::thread_rng())
}

pub fn draw_with<'a, R: Rng + ?Sized>(view: &[&'a Submission], rng: &mut R) -> Vec<&'a Submission> {
    let mut pool: Vec<&Submission> = view.to_vec();
    let amount = pool.len().min(DRAW_SIZE);
    let (picked, _) = pool.partial_shuffle(rng, amount);
    picked.to_vec()
}

/// The plain-text block placed on the clipboard by the commit action. The
/// format is a fixed contract: index, name, portfolio link, location, mapped
/// focus label, mapped seeking label, one blank line between entries.
pub fn selection_summary(picks: &[Submission]) -> String {
    picks
        .iter()
        .enumerate()
        .map(|(index, person)| {
            format!(
                "{}. {}\nPortfolio: {}\nLocation: {}\nFocus: {}\nSeeking: {}",
                index + 1,
                person.full_name,
                person.portfolio_url,
                person.location_str(),
                design_focus_label(&person.design_focus),
                opportunities_label(&person.opportunities),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
