use std::fmt;
use std::str::FromStr;

use crate::domain::errors::BlankFieldError;
use crate::physician::errors::DocumentError;
use crate::physician::errors::EmailError;
use crate::physician::errors::PhysicianIdError;
use crate::physician::errors::SpecialtyError;

/// Physician aggregate entity.
///
/// Never physically deleted: deactivation clears `active`, which hides the
/// physician from listings while keeping it reachable by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Physician {
    pub id: PhysicianId,
    pub name: PhysicianName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub document: DocumentNumber,
    pub specialty: Specialty,
    pub address: Address,
    pub active: bool,
}

impl Physician {
    /// Overwrite the fields present in `command`, leaving the rest untouched.
    ///
    /// A supplied address replaces the stored one as a whole.
    pub fn apply_update(&mut self, command: UpdatePhysicianCommand) {
        if let Some(name) = command.name {
            self.name = name;
        }

        if let Some(email) = command.email {
            self.email = email;
        }

        if let Some(phone) = command.phone {
            self.phone = phone;
        }

        if let Some(document) = command.document {
            self.document = document;
        }

        if let Some(address) = command.address {
            self.address = address;
        }
    }
}

/// Storage-assigned physician identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicianId(pub i64);

impl PhysicianId {
    /// Parse a physician ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not a positive integer
    pub fn from_string(s: &str) -> Result<Self, PhysicianIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(PhysicianIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for PhysicianId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Mandatory free-text value (trimmed, never blank)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    pub fn new(value: String) -> Result<Self, BlankFieldError> {
        BlankFieldError::check(value).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Physician display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhysicianName(String);

impl PhysicianName {
    pub fn new(name: String) -> Result<Self, BlankFieldError> {
        BlankFieldError::check(name).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhysicianName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Contact phone number, kept as entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone: String) -> Result<Self, BlankFieldError> {
        BlankFieldError::check(phone).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `Blank` - Empty or whitespace only
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = BlankFieldError::check(email).map_err(|_| EmailError::Blank)?;

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Professional registration number.
///
/// Unique per physician; 4 to 6 ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentNumber(String);

impl DocumentNumber {
    const MIN_DIGITS: usize = 4;
    const MAX_DIGITS: usize = 6;

    /// # Errors
    /// * `Blank` - Empty or whitespace only
    /// * `InvalidFormat` - Not 4 to 6 digits
    pub fn new(document: String) -> Result<Self, DocumentError> {
        let document = BlankFieldError::check(document).map_err(|_| DocumentError::Blank)?;

        let length = document.len();
        if (Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&length)
            && document.chars().all(|c| c.is_ascii_digit())
        {
            Ok(Self(document))
        } else {
            Err(DocumentError::InvalidFormat {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Medical specialty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specialty {
    Orthopedics,
    Cardiology,
    Gynecology,
    Dermatology,
}

impl Specialty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Orthopedics => "ORTHOPEDICS",
            Specialty::Cardiology => "CARDIOLOGY",
            Specialty::Gynecology => "GYNECOLOGY",
            Specialty::Dermatology => "DERMATOLOGY",
        }
    }
}

impl FromStr for Specialty {
    type Err = SpecialtyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "ORTHOPEDICS" => Ok(Specialty::Orthopedics),
            "CARDIOLOGY" => Ok(Specialty::Cardiology),
            "GYNECOLOGY" => Ok(Specialty::Gynecology),
            "DERMATOLOGY" => Ok(Specialty::Dermatology),
            other => Err(SpecialtyError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal address embedded in a physician record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: RequiredText,
    pub district: RequiredText,
    pub city: RequiredText,
    pub number: RequiredText,
    pub complement: RequiredText,
}

/// Physician about to be stored; the repository assigns its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPhysician {
    pub name: PhysicianName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub document: DocumentNumber,
    pub specialty: Specialty,
    pub address: Address,
    pub active: bool,
}

impl NewPhysician {
    pub fn with_id(self, id: PhysicianId) -> Physician {
        Physician {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            document: self.document,
            specialty: self.specialty,
            address: self.address,
            active: self.active,
        }
    }
}

/// Command to register a new physician with domain types
#[derive(Debug, Clone)]
pub struct RegisterPhysicianCommand {
    pub name: PhysicianName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub document: DocumentNumber,
    pub specialty: Specialty,
    pub address: Address,
}

/// Command to update an existing physician with optional validated fields.
///
/// Only provided fields will be updated. Specialty is fixed at registration.
#[derive(Debug, Clone, Default)]
pub struct UpdatePhysicianCommand {
    pub name: Option<PhysicianName>,
    pub email: Option<EmailAddress>,
    pub phone: Option<PhoneNumber>,
    pub document: Option<DocumentNumber>,
    pub address: Option<Address>,
}


#[cfg(test)]
mod tests {
    use super::fixtures;
    use super::*;

    #[test]
    fn test_physician_id_from_string() {
        assert_eq!(PhysicianId::from_string("42"), Ok(PhysicianId(42)));
        assert!(PhysicianId::from_string("0").is_err());
        assert!(PhysicianId::from_string("-3").is_err());
        assert!(PhysicianId::from_string("abc").is_err());
    }

    #[test]
    fn test_required_text_rejects_blank() {
        assert_eq!(RequiredText::new("   ".to_string()), Err(BlankFieldError));
        assert_eq!(RequiredText::new(String::new()), Err(BlankFieldError));
        assert_eq!(
            RequiredText::new("  Centro ".to_string()).unwrap().as_str(),
            "Centro"
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(EmailAddress::new("ana@x.com".to_string()).is_ok());
        assert_eq!(EmailAddress::new(" ".to_string()), Err(EmailError::Blank));
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_document_accepts_four_to_six_digits() {
        for document in ["1234", "12345", "123456"] {
            assert!(DocumentNumber::new(document.to_string()).is_ok(), "{}", document);
        }
    }

    #[test]
    fn test_document_rejects_bad_formats() {
        for document in ["123", "1234567", "12a4", "12 34", "１２３４"] {
            assert!(
                matches!(
                    DocumentNumber::new(document.to_string()),
                    Err(DocumentError::InvalidFormat { min: 4, max: 6 })
                ),
                "{}",
                document
            );
        }
        assert_eq!(DocumentNumber::new("".to_string()), Err(DocumentError::Blank));
    }

    #[test]
    fn test_specialty_parsing() {
        assert_eq!("CARDIOLOGY".parse::<Specialty>(), Ok(Specialty::Cardiology));
        assert_eq!(Specialty::Dermatology.as_str(), "DERMATOLOGY");
        assert_eq!(
            "cardiology".parse::<Specialty>(),
            Err(SpecialtyError::Unknown("cardiology".to_string()))
        );
    }

    #[test]
    fn test_apply_update_changes_only_supplied_fields() {
        let original = fixtures::physician(7);
        let mut updated = original.clone();

        updated.apply_update(UpdatePhysicianCommand {
            email: Some(EmailAddress::new("x@clinic.com".to_string()).unwrap()),
            ..Default::default()
        });

        assert_eq!(updated.email.as_str(), "x@clinic.com");
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.phone, original.phone);
        assert_eq!(updated.document, original.document);
        assert_eq!(updated.specialty, original.specialty);
        assert_eq!(updated.address, original.address);
        assert!(updated.active);
    }

    #[test]
    fn test_apply_update_replaces_whole_address() {
        let mut physician = fixtures::physician(7);
        let new_address = Address {
            street: fixtures::text("Av. Arequipa"),
            district: fixtures::text("Miraflores"),
            city: fixtures::text("Lima"),
            number: fixtures::text("455"),
            complement: fixtures::text("Of. 2"),
        };

        physician.apply_update(UpdatePhysicianCommand {
            address: Some(new_address.clone()),
            ..Default::default()
        });

        assert_eq!(physician.address, new_address);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let original = fixtures::physician(7);
        let mut physician = original.clone();

        physician.apply_update(UpdatePhysicianCommand::default());

        assert_eq!(physician, original);
    }
}
