//! Fallback story content.
//!
//! Shown in place of a generated story whenever generation fails.

use super::entities::Story;

pub const FALLBACK_TITLE: &str = "Barnaby the Brave Bunny";

pub const FALLBACK_PAGES: [&str; 5] = [
    "Once upon a time, in a sunny meadow, lived a little bunny named Barnaby. He had the fluffiest tail and the twitchiest nose of all his friends.",
    "One sunny morning, while hopping through the tall grass, Barnaby saw something magical! It was a carrot, but it was glowing with a soft, golden light.",
    "Barnaby wiggled his nose and bravely nibbled the glowing carrot. *POP!* Suddenly, he could understand the birds singing in the trees and the squirrels chattering away.",
    "He spent the whole day talking to his new friends, learning secrets of the forest. He learned where the juiciest clovers grew and where the best hiding spots were.",
    "As the sun set, the glow from the carrot faded, but Barnaby never forgot his magical day. He was no longer just a curious bunny; he was Barnaby, the bunny who could talk to animals!",
];

impl Story {
    /// Whether this story is the fallback story
    pub fn is_fallback(&self) -> bool {
        self.title() == FALLBACK_TITLE
            && self.pages().iter().map(String::as_str).eq(FALLBACK_PAGES)
    }
}
