//! CSS selectors for the directory page markup.
//!
//! These strings are a compatibility contract with the rendered page and
//! must stay bit-exact; the class names come from the directory widget's
//! own markup, not from us.

/// One directory listing per person.
pub const ENTRY: &str = ".directory-Entry";

/// The entry's title element (the person's name).
pub const ENTRY_TITLE: &str = ".directory-Entry_Title";

/// A field value holding a mailto link, anywhere in the entry.
pub const MAILTO_VALUE: &str = r#".directory-Entry_FieldValue a[href^="mailto:"]"#;

/// The household section within an entry (shared family fields). The
/// scoping prefix of the two household selectors below.
pub const HOUSEHOLD_SECTION: &str = ".directory-Entry_HouseholdSection";

/// A mailto field value restricted to the household section.
pub const HOUSEHOLD_MAILTO_VALUE: &str =
    r#".directory-Entry_HouseholdSection .directory-Entry_FieldValue a[href^="mailto:"]"#;

/// A field title within the household section (the household address).
pub const HOUSEHOLD_FIELD_TITLE: &str =
    ".directory-Entry_HouseholdSection .directory-Entry_FieldTitle";
