//! Plain-text renderings of the site pages: About, Leadership, Beliefs and
//! Visit Us.

use crate::app::AppContext;
use crate::domain::leadership::team;
use crate::domain::{
    AboutContent, ChurchKnowledge, ContactContent, LeadershipRole, STATEMENT_OF_FAITH,
    load_about_or_default, load_contact_or_default, load_knowledge_or_default,
};
use crate::ports::{ContentProvider, GenerationClient};

pub fn about<C: GenerationClient, P: ContentProvider>(ctx: &AppContext<C, P>) -> AboutContent {
    load_about_or_default(ctx.content())
}

pub fn contact<C: GenerationClient, P: ContentProvider>(ctx: &AppContext<C, P>) -> ContactContent {
    load_contact_or_default(ctx.content())
}

/// Knowledge record behind the Beliefs page.
pub fn beliefs<C: GenerationClient, P: ContentProvider>(ctx: &AppContext<C, P>) -> ChurchKnowledge {
    load_knowledge_or_default(ctx.content())
}

pub fn render_about(about: &AboutContent) -> String {
    let mut text = format!("{}\n{}\n\n{}\n", about.hero.title, about.hero.subtitle, about.hero.description);
    for section in [&about.story, &about.mission, &about.vision] {
        text.push_str(&format!("\n{}\n{}\n", section.title, section.content));
    }
    if !about.values.is_empty() {
        text.push_str("\nOur Values\n");
        for value in &about.values {
            text.push_str(&format!("- {}: {}\n", value.title, value.description));
        }
    }
    text
}

pub fn render_contact(contact: &ContactContent) -> String {
    let times = &contact.service_time;
    let hours = &contact.office_hours;
    format!(
        "Service Times\n\
         Sunday:    {} and {}\n\
         Wednesday: Prayer at {}\n\
         \n\
         Address: {}\n\
         Phone:   {}\n\
         Email:   {}\n\
         Website: {}\n\
         \n\
         Office Hours\n\
         Weekdays: {}\n\
         Saturday: {}\n\
         Sunday:   {}\n",
        times.sunday.morning,
        times.sunday.evening,
        times.wednesday.prayer,
        contact.address.full,
        contact.phone,
        contact.email,
        contact.website,
        hours.weekdays,
        hours.saturday,
        hours.sunday,
    )
}

pub fn render_leadership() -> String {
    let mut text = String::from(
        "Our Leadership\nMeet the dedicated individuals who serve and guide our church community \
         with wisdom, love, and faith.\n",
    );
    for role in LeadershipRole::ALL {
        text.push_str(&format!("\n{} Team\n{}\n", role.label(), role.team_summary()));
        for profile in team(role) {
            text.push_str(&format!("- {}: {}\n", profile.name, role.member_summary()));
        }
    }
    text
}

/// Detailed beliefs when the record has any, else the statement of faith.
pub fn render_beliefs(knowledge: &ChurchKnowledge) -> String {
    let mut text = String::from("Our Beliefs\n\nStatement of Faith\n");
    if knowledge.detailed_beliefs.is_empty() {
        text.push_str(STATEMENT_OF_FAITH.trim());
        text.push('\n');
        return text;
    }

    for (index, belief) in knowledge.detailed_beliefs.values().enumerate() {
        text.push_str(&format!("\n{}. {}\n{}\n", index + 1, belief.title, belief.content));
    }
    text
}
