//! The in-memory project record.

/// Number of text fields per record.
pub const TEXT_FIELD_COUNT: usize = 9;

/// Number of credit (integer) fields per record.
pub const CREDIT_FIELD_COUNT: usize = 4;

/// Total positional fields on one input line.
pub const FIELD_COUNT: usize = TEXT_FIELD_COUNT + CREDIT_FIELD_COUNT;

/// Encoded size of the credit block: four big-endian `i32` values.
pub const CREDIT_BLOCK_LEN: usize = CREDIT_FIELD_COUNT * 4;

/// Positional index of a text field within a record.
///
/// The order here is the column order of the registry export and the byte
/// order of the encoded record; both sides rely on [`TextField::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextField {
    ProjectId,
    Name,
    Status,
    Scope,
    ProjectType,
    Methodology,
    Region,
    Country,
    Subregion,
}

impl TextField {
    /// All text fields in positional order.
    pub const ALL: [TextField; TEXT_FIELD_COUNT] = [
        TextField::ProjectId,
        TextField::Name,
        TextField::Status,
        TextField::Scope,
        TextField::ProjectType,
        TextField::Methodology,
        TextField::Region,
        TextField::Country,
        TextField::Subregion,
    ];

    /// Positional index (0..9).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable field name for logs and error messages.
    pub fn label(self) -> &'static str {
        match self {
            TextField::ProjectId => "project id",
            TextField::Name => "name",
            TextField::Status => "status",
            TextField::Scope => "scope",
            TextField::ProjectType => "project type",
            TextField::Methodology => "methodology",
            TextField::Region => "region",
            TextField::Country => "country",
            TextField::Subregion => "subregion",
        }
    }
}

/// One registry project row: nine text fields and four credit fields in
/// fixed positional order.
///
/// A record starts empty, is populated field-by-field by the ingest pass,
/// has its text fields rewritten once by the padding pass, and is read-only
/// from then on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRecord {
    pub project_id: String,
    pub name: String,
    pub status: String,
    pub scope: String,
    pub project_type: String,
    pub methodology: String,
    pub region: String,
    pub country: String,
    pub subregion: String,
    /// Credits issued; the ordering key.
    pub issued: i32,
    pub retired: i32,
    pub remaining: i32,
    pub first_year: i32,
}

impl ProjectRecord {
    /// Borrow a text field by position.
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::ProjectId => &self.project_id,
            TextField::Name => &self.name,
            TextField::Status => &self.status,
            TextField::Scope => &self.scope,
            TextField::ProjectType => &self.project_type,
            TextField::Methodology => &self.methodology,
            TextField::Region => &self.region,
            TextField::Country => &self.country,
            TextField::Subregion => &self.subregion,
        }
    }

    /// Mutably borrow a text field by position.
    pub fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::ProjectId => &mut self.project_id,
            TextField::Name => &mut self.name,
            TextField::Status => &mut self.status,
            TextField::Scope => &mut self.scope,
            TextField::ProjectType => &mut self.project_type,
            TextField::Methodology => &mut self.methodology,
            TextField::Region => &mut self.region,
            TextField::Country => &mut self.country,
            TextField::Subregion => &mut self.subregion,
        }
    }

    /// The credit fields in encoded order.
    pub fn credits(&self) -> [i32; CREDIT_FIELD_COUNT] {
        [self.issued, self.retired, self.remaining, self.first_year]
    }

    /// Set the credit fields from encoded order.
    pub fn set_credits(&mut self, credits: [i32; CREDIT_FIELD_COUNT]) {
        [self.issued, self.retired, self.remaining, self.first_year] = credits;
    }
}
