//! Parser for JVM method and field descriptors.
//!
//! A method descriptor is `( <tag>* ) <tag>`: the parenthesized argument
//! tags followed by exactly one return tag. A tag is a single primitive
//! code (`Z B C S I J F D`), `V` for void, `L<class-name>;` for an object
//! reference, or `[` followed by the element tag for an array (nested
//! arrays recurse).
//!
//! Signatures arrive at run time from outside the process, so a malformed
//! one is an ordinary error, never a panic.

use std::fmt;

use crate::error::BridgeError;

/// One type position in a descriptor.
///
/// Object and array types carry their full descriptor text (`"Ljava/lang/String;"`,
/// `"[[I"`); everything the dispatcher needs to know about a reference type
/// is which class to resolve, and [`TypeTag::class_name`] recovers that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeTag {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
    Ref(String),
}

impl TypeTag {
    /// True for the eight primitive tags; false for `Void` and `Ref`.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, TypeTag::Void | TypeTag::Ref(_))
    }

    /// The descriptor text of this tag.
    pub fn descriptor(&self) -> String {
        match self {
            TypeTag::Boolean => "Z".into(),
            TypeTag::Byte => "B".into(),
            TypeTag::Char => "C".into(),
            TypeTag::Short => "S".into(),
            TypeTag::Int => "I".into(),
            TypeTag::Long => "J".into(),
            TypeTag::Float => "F".into(),
            TypeTag::Double => "D".into(),
            TypeTag::Void => "V".into(),
            TypeTag::Ref(d) => d.clone(),
        }
    }

    /// The name to hand to class resolution for a reference tag: the inner
    /// name for `L...;`, the descriptor itself for an array (the JVM resolves
    /// array classes by descriptor). `None` for primitives and void.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            TypeTag::Ref(d) if d.starts_with('L') && d.ends_with(';') => {
                Some(&d[1..d.len() - 1])
            }
            TypeTag::Ref(d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor())
    }
}

/// A parsed method descriptor: the argument tags and the return tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub args: Vec<TypeTag>,
    pub ret: TypeTag,
}

impl Signature {
    /// Parses a method descriptor. Pure: identical input text always yields
    /// a structurally identical value.
    pub fn parse(text: &str) -> Result<Signature, BridgeError> {
        let bytes = text.as_bytes();
        let malformed = |detail: &str| BridgeError::MalformedSignature {
            sig: text.to_string(),
            detail: detail.to_string(),
        };

        if bytes.first() != Some(&b'(') {
            return Err(malformed("expected '('"));
        }

        let mut pos = 1;
        let mut args = Vec::new();
        loop {
            match bytes.get(pos) {
                Some(b')') => {
                    pos += 1;
                    break;
                }
                Some(_) => args.push(parse_tag(text, &mut pos)?),
                None => return Err(malformed("missing ')'")),
            }
        }

        if pos >= bytes.len() {
            return Err(malformed("missing return type"));
        }
        let ret = parse_tag(text, &mut pos)?;
        if pos != bytes.len() {
            return Err(malformed("trailing characters after return type"));
        }

        Ok(Signature { args, ret })
    }

    /// Parses a bare field/element descriptor (a single tag, no parentheses).
    pub fn parse_tag(text: &str) -> Result<TypeTag, BridgeError> {
        let mut pos = 0;
        let tag = parse_tag(text, &mut pos)?;
        if pos != text.len() {
            return Err(BridgeError::MalformedSignature {
                sig: text.to_string(),
                detail: "trailing characters after type".to_string(),
            });
        }
        Ok(tag)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for a in &self.args {
            write!(f, "{a}")?;
        }
        write!(f, "){}", self.ret)
    }
}

/// Consumes one tag starting at `*pos`, advancing `*pos` past it.
fn parse_tag(text: &str, pos: &mut usize) -> Result<TypeTag, BridgeError> {
    let bytes = text.as_bytes();
    let start = *pos;
    let malformed = |detail: String| BridgeError::MalformedSignature {
        sig: text.to_string(),
        detail,
    };

    // Arrays: skip the brackets, then the element tag decides the end.
    let mut i = start;
    while bytes.get(i) == Some(&b'[') {
        i += 1;
    }

    let lead = *bytes
        .get(i)
        .ok_or_else(|| malformed("truncated array descriptor".to_string()))?;

    let end = match lead {
        b'Z' | b'B' | b'C' | b'S' | b'I' | b'J' | b'F' | b'D' | b'V' => i + 1,
        b'L' => match text[i..].find(';') {
            Some(semi) => i + semi + 1,
            None => return Err(malformed("unterminated class name (missing ';')".to_string())),
        },
        other => {
            return Err(malformed(format!("unknown type code {:?}", other as char)));
        }
    };

    *pos = end;

    if end - start > 1 {
        // Array or object descriptor: keep the text.
        return Ok(TypeTag::Ref(text[start..end].to_string()));
    }
    Ok(match lead {
        b'Z' => TypeTag::Boolean,
        b'B' => TypeTag::Byte,
        b'C' => TypeTag::Char,
        b'S' => TypeTag::Short,
        b'I' => TypeTag::Int,
        b'J' => TypeTag::Long,
        b'F' => TypeTag::Float,
        b'D' => TypeTag::Double,
        b'V' => TypeTag::Void,
        _ => unreachable!("lead byte checked above"),
    })
}
