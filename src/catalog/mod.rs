//! Read contract for the public catalog view.
//!
//! Pure lookups over the state container. Rendering itself lives outside
//! this crate.

use crate::models::{Party, PartyStatus};
use crate::state::SiteState;

/// Look up a single party for the detail view.
pub fn party_by_id<'a>(site: &'a SiteState, id: &str) -> Option<&'a Party> {
    site.parties().iter().find(|p| p.id == id)
}

/// The application link for the detail view: present only while the party
/// is recruiting. Closed and completed parties render a disabled control.
pub fn application_link(party: &Party) -> Option<&str> {
    match party.status {
        PartyStatus::Recruiting => Some(party.google_form_url.as_str()),
        PartyStatus::Closed | PartyStatus::Completed => None,
    }
}

/// Seats still open, floored at zero.
pub fn remaining_seats(party: &Party) -> i32 {
    (party.capacity - party.current_applicants).max(0)
}

/// Price with thousands grouping, e.g. `150,000`.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if price < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
