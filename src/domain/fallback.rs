//! Keyword-matched answers used when the generation API is unavailable.
//!
//! Entries are scanned in declaration order against the lowercased question
//! and the first keyword contained in it wins, so more specific phrases must
//! be listed before the single words they contain.

/// Answer given when no keyword matches.
pub const GENERIC_CONTACT_MESSAGE: &str = "Thank you for your question! I don't have specific \
information about that right now, but our church family would love to help. Please call us at \
(555) 123-HOPE, email info@livinghopechurch.org, or join us on Sunday at 10:00 AM and speak \
with someone in person.";

const SERVICE_TIMES: &str = "We'd love to worship with you! Our Sunday services are at 10:00 AM \
and 6:00 PM, and we gather for prayer on Wednesdays at 7:00 PM.";

const LOCATION: &str = "You can find us at 123 Hope Street, Springfield, State 12345. There is \
free parking on site, and our greeters will be happy to help you find your way.";

const BELIEFS: &str = "We believe the Bible is the inspired Word of God, in one God eternally \
existent as Father, Son and Holy Spirit, and in salvation through Jesus Christ. Our full \
Statement of Faith is on our Beliefs page, and we're always glad to talk it through with you.";

const BAPTISM: &str = "Baptism is a joyful public step of faith for believers. We hold baptism \
services throughout the year; please contact us at (555) 123-HOPE or \
info@livinghopechurch.org and one of our pastors will walk you through it.";

const MEMBERSHIP: &str = "Becoming a member is a great way to belong to our church family. We \
run a short membership class for anyone interested; reach out at info@livinghopechurch.org to \
find out when the next one starts.";

const PASTOR: &str = "Our pastoral team is here to support you in prayer, counsel and care. You \
can reach them through the church office at (555) 123-HOPE, Monday to Friday from 9:00 AM to \
5:00 PM.";

const PROGRAMS: &str = "We offer ministries for every stage of life, including children's \
church, youth ministry, small groups, prayer gatherings and community outreach. Ask us about any \
of them and we'll help you get connected.";

const SMALL_GROUPS: &str = "Small groups are an important part of our community. They meet in \
homes across Springfield during the week to study the Bible, pray and share life together. \
Contact us and we'll help you find one near you.";

const CHILDREN: &str = "Kids are very welcome! We have children's programs and a nursery \
available during all services, led by trained and caring volunteers.";

const YOUTH: &str = "Our youth ministry is a place for teenagers to grow in faith and \
friendship. Contact us at info@livinghopechurch.org for this term's schedule.";

const PRAYER: &str = "We'd be honoured to pray with you. Join our prayer meeting on Wednesdays at \
7:00 PM, or send your prayer request to info@livinghopechurch.org.";

const VOLUNTEER: &str = "Thank you for wanting to serve! There are many ways to get involved, \
from welcoming guests to helping with children's church and community outreach. Email \
info@livinghopechurch.org to find the right fit.";

const CONTACT: &str = "You can reach us by phone at (555) 123-HOPE or by email at \
info@livinghopechurch.org. Our office is open weekdays from 9:00 AM to 5:00 PM.";

const VISIT: &str = "We can't wait to welcome you! Come as you are to one of our Sunday services \
at 10:00 AM or 6:00 PM. Feel free to observe and participate as much or as little as you're \
comfortable with.";

const DRESS: &str = "No dress code required! Wear whatever makes you comfortable; we're just \
happy you're here.";

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    ("service times", SERVICE_TIMES),
    ("sunday", SERVICE_TIMES),
    ("worship", SERVICE_TIMES),
    ("wednesday", SERVICE_TIMES),
    ("address", LOCATION),
    ("location", LOCATION),
    ("directions", LOCATION),
    ("parking", LOCATION),
    ("believe", BELIEFS),
    ("beliefs", BELIEFS),
    ("baptism", BAPTISM),
    ("membership", MEMBERSHIP),
    ("pastor", PASTOR),
    ("programs", PROGRAMS),
    ("ministries", PROGRAMS),
    ("small group", SMALL_GROUPS),
    ("children", CHILDREN),
    ("kids", CHILDREN),
    ("youth", YOUTH),
    ("prayer", PRAYER),
    ("volunteer", VOLUNTEER),
    ("contact", CONTACT),
    ("phone", CONTACT),
    ("email", CONTACT),
    ("visit", VISIT),
    ("dress", DRESS),
];

/// One keyword and the canned answer it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackEntry {
    keyword: String,
    answer: String,
}

impl FallbackEntry {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Ordered keyword table with a generic answer for unmatched questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTable {
    entries: Vec<FallbackEntry>,
    generic_answer: String,
}

impl FallbackTable {
    /// Build a table from ordered `(keyword, answer)` pairs.
    ///
    /// Keywords are lowercased. Pairs with a blank keyword or answer are
    /// dropped, and a blank generic answer is replaced by
    /// [`GENERIC_CONTACT_MESSAGE`], so lookups never yield an empty string.
    pub fn new<K, A>(entries: impl IntoIterator<Item = (K, A)>, generic_answer: &str) -> Self
    where
        K: AsRef<str>,
        A: Into<String>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(keyword, answer)| {
                let keyword = keyword.as_ref().trim().to_lowercase();
                let answer = answer.into();
                if keyword.is_empty() || answer.trim().is_empty() {
                    None
                } else {
                    Some(FallbackEntry { keyword, answer })
                }
            })
            .collect();

        let generic_answer = if generic_answer.trim().is_empty() {
            GENERIC_CONTACT_MESSAGE.to_string()
        } else {
            generic_answer.to_string()
        };

        Self { entries, generic_answer }
    }

    pub fn entries(&self) -> &[FallbackEntry] {
        &self.entries
    }

    pub fn generic_answer(&self) -> &str {
        &self.generic_answer
    }

    /// First entry whose keyword occurs in the question, ignoring case.
    pub fn find(&self, question: &str) -> Option<&FallbackEntry> {
        let lowered = question.to_lowercase();
        self.entries.iter().find(|entry| lowered.contains(entry.keyword.as_str()))
    }

    /// Answer for the question; the generic message when nothing matches.
    pub fn answer_for(&self, question: &str) -> &str {
        self.find(question).map(FallbackEntry::answer).unwrap_or(&self.generic_answer)
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRIES.iter().copied(), GENERIC_CONTACT_MESSAGE)
    }
}
