/// Classification of a single input byte.
///
/// The low bit marks alphanumerics, the second bit marks uppercase letters.
/// Uppercase letters always carry both bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask(u8);

impl Mask {
    pub const NON_ALNUM: Mask = Mask(0b00);
    pub const ALNUM: Mask = Mask(0b01);
    pub const UPPER: Mask = Mask(0b10 | 0b01);

    /// Classify a byte. Only ASCII letters and digits are alphanumeric.
    pub fn of(b: u8) -> Self {
        if b.is_ascii_uppercase() {
            Mask::UPPER
        } else if b.is_ascii_alphanumeric() {
            Mask::ALNUM
        } else {
            Mask::NON_ALNUM
        }
    }

    pub fn is_alnum(self) -> bool {
        self.0 & Mask::ALNUM.0 != 0
    }

    pub fn is_upper(self) -> bool {
        self.0 & 0b10 != 0
    }
}
