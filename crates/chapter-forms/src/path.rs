// File: src/path.rs
// Purpose: Typed field paths (`contact.email`, `foundingMembers[2].phone`)

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing a field path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("unknown field path `{0}`")]
    Unknown(String),

    #[error("malformed member index in `{0}`")]
    BadIndex(String),
}

/// Fields of the point-of-contact block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Linkedin,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Linkedin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Linkedin => "linkedin",
        }
    }
}

impl FromStr for ContactField {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| PathError::Unknown(format!("contact.{}", s)))
    }
}

/// Fields of one founding member block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberField {
    Role,
    Name,
    Email,
    Phone,
    Linkedin,
    Discipline,
    Study,
}

impl MemberField {
    pub const ALL: [MemberField; 7] = [
        MemberField::Role,
        MemberField::Name,
        MemberField::Email,
        MemberField::Phone,
        MemberField::Linkedin,
        MemberField::Discipline,
        MemberField::Study,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberField::Role => "role",
            MemberField::Name => "name",
            MemberField::Email => "email",
            MemberField::Phone => "phone",
            MemberField::Linkedin => "linkedin",
            MemberField::Discipline => "discipline",
            MemberField::Study => "study",
        }
    }
}

impl FromStr for MemberField {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| PathError::Unknown(format!("foundingMembers[].{}", s)))
    }
}

/// What kind of input control feeds a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Checkbox,
    Files,
    /// The member list itself; changed only through add/remove
    Roster,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Text => "text",
            InputKind::Checkbox => "checkbox",
            InputKind::Files => "files",
            InputKind::Roster => "roster",
        };
        f.write_str(name)
    }
}

/// Address of one field in an application
///
/// Ordering follows the order fields appear on the form, so sorted paths read
/// top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldPath {
    University,
    Address,
    State,
    Pincode,
    District,
    Website,
    Contact(ContactField),
    FoundingMembers,
    Member(usize, MemberField),
    Resume,
    Proof,
    ChapterPlan,
    Declaration,
    Consent,
}

const TOP_LEVEL: [(&str, FieldPath); 12] = [
    ("university", FieldPath::University),
    ("address", FieldPath::Address),
    ("state", FieldPath::State),
    ("pincode", FieldPath::Pincode),
    ("district", FieldPath::District),
    ("website", FieldPath::Website),
    ("foundingMembers", FieldPath::FoundingMembers),
    ("resume", FieldPath::Resume),
    ("proof", FieldPath::Proof),
    ("chapterPlan", FieldPath::ChapterPlan),
    ("declaration", FieldPath::Declaration),
    ("consent", FieldPath::Consent),
];

impl FieldPath {
    /// Every path of an application whose roster has `members` entries, in
    /// form order
    pub fn all(members: usize) -> Vec<FieldPath> {
        let mut paths = vec![
            FieldPath::University,
            FieldPath::Address,
            FieldPath::State,
            FieldPath::Pincode,
            FieldPath::District,
            FieldPath::Website,
        ];
        paths.extend(ContactField::ALL.into_iter().map(FieldPath::Contact));
        paths.push(FieldPath::FoundingMembers);
        for index in 0..members {
            paths.extend(
                MemberField::ALL
                    .into_iter()
                    .map(|field| FieldPath::Member(index, field)),
            );
        }
        paths.extend([
            FieldPath::Resume,
            FieldPath::Proof,
            FieldPath::ChapterPlan,
            FieldPath::Declaration,
            FieldPath::Consent,
        ]);
        paths
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            FieldPath::FoundingMembers => InputKind::Roster,
            FieldPath::Resume | FieldPath::Proof => InputKind::Files,
            FieldPath::Declaration | FieldPath::Consent => InputKind::Checkbox,
            _ => InputKind::Text,
        }
    }

    /// Index of the member this path points into, if any
    pub fn member_index(&self) -> Option<usize> {
        match self {
            FieldPath::Member(index, _) => Some(*index),
            _ => None,
        }
    }

    pub fn is_phone(&self) -> bool {
        matches!(
            self,
            FieldPath::Contact(ContactField::Phone) | FieldPath::Member(_, MemberField::Phone)
        )
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Contact(field) => write!(f, "contact.{}", field.as_str()),
            FieldPath::Member(index, field) => {
                write!(f, "foundingMembers[{}].{}", index, field.as_str())
            }
            top => {
                let name = TOP_LEVEL
                    .iter()
                    .find(|(_, path)| path == top)
                    .map(|(name, _)| *name)
                    .unwrap_or_default();
                f.write_str(name)
            }
        }
    }
}

#[derive(Debug, PartialEq)]
enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

fn parse_index(digits: &str, path: &str) -> Result<usize, PathError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PathError::BadIndex(path.to_string()));
    }
    digits
        .parse()
        .map_err(|_| PathError::BadIndex(path.to_string()))
}

/// Split `foundingMembers[2].phone` or `foundingMembers.2.phone` into
/// key/index segments
fn segments(path: &str) -> Result<Vec<Segment<'_>>, PathError> {
    let mut out = Vec::new();

    for part in path.split('.') {
        let (key, mut rest) = match part.find('[') {
            Some(open) => part.split_at(open),
            None => (part, ""),
        };

        if key.is_empty() && rest.is_empty() {
            return Err(PathError::Unknown(path.to_string()));
        }

        if !key.is_empty() {
            if key.bytes().all(|b| b.is_ascii_digit()) {
                out.push(Segment::Index(parse_index(key, path)?));
            } else {
                out.push(Segment::Key(key));
            }
        }

        // `rest` is empty or starts with '['
        while !rest.is_empty() {
            let close = rest
                .find(']')
                .ok_or_else(|| PathError::BadIndex(path.to_string()))?;
            out.push(Segment::Index(parse_index(&rest[1..close], path)?));
            rest = &rest[close + 1..];
            if !rest.is_empty() && !rest.starts_with('[') {
                return Err(PathError::BadIndex(path.to_string()));
            }
        }
    }

    Ok(out)
}

impl FromStr for FieldPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || PathError::Unknown(s.to_string());

        match segments(s)?.as_slice() {
            [Segment::Key(key)] => TOP_LEVEL
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, path)| *path)
                .ok_or_else(unknown),
            [Segment::Key("contact"), Segment::Key(field)] => {
                field.parse().map(FieldPath::Contact).map_err(|_| unknown())
            }
            [Segment::Key("foundingMembers"), Segment::Index(index), Segment::Key(field)] => field
                .parse()
                .map(|field| FieldPath::Member(*index, field))
                .map_err(|_| unknown()),
            _ => Err(unknown()),
        }
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
