use super::{Tag, NBT};

impl NBT {
  pub fn serialize_buf(&self, out: &mut Vec<u8>) {
    out.push(self.tag.ty());
    if matches!(self.tag, Tag::End) {
      return;
    }
    out.extend_from_slice(&(self.name.len() as u16).to_be_bytes());
    out.extend_from_slice(self.name.as_bytes());
    self.tag.serialize(out);
  }
  pub fn serialize(&self) -> Vec<u8> {
    let mut data = vec![];
    self.serialize_buf(&mut data);
    data
  }
}

impl Tag {
  /// Returns the type of the tag.
  pub fn ty(&self) -> u8 {
    match self {
      Self::End => 0,
      Self::Byte(_) => 1,
      Self::Short(_) => 2,
      Self::Int(_) => 3,
      Self::Long(_) => 4,
      Self::Float(_) => 5,
      Self::Double(_) => 6,
      Self::String(_) => 8,
      Self::List(_) => 9,
      Self::Compound(_) => 10,
    }
  }

  /// Serializes the data of the tag. Does not add the type byte.
  fn serialize(&self, out: &mut Vec<u8>) {
    match self {
      Self::End => (),
      Self::Byte(v) => out.extend_from_slice(&v.to_be_bytes()),
      Self::Short(v) => out.extend_from_slice(&v.to_be_bytes()),
      Self::Int(v) => out.extend_from_slice(&v.to_be_bytes()),
      Self::Long(v) => out.extend_from_slice(&v.to_be_bytes()),
      Self::Float(v) => out.extend_from_slice(&v.to_be_bytes()),
      Self::Double(v) => out.extend_from_slice(&v.to_be_bytes()),
      Self::String(v) => {
        out.extend_from_slice(&(v.len() as u16).to_be_bytes());
        out.extend_from_slice(v.as_bytes());
      }
      Self::List(v) => {
        out.push(v.first().unwrap_or(&Self::End).ty());
        out.extend_from_slice(&(v.len() as i32).to_be_bytes());
        for tag in v {
          tag.serialize(out);
        }
      }
      Self::Compound(v) => {
        for (name, tag) in v {
          // Each entry is stored like a named tag.
          out.push(tag.ty());
          if tag.ty() == Self::End.ty() {
            // End tags don't have a name, so we stop early.
            break;
          }
          out.extend_from_slice(&(name.len() as u16).to_be_bytes());
          out.extend_from_slice(name.as_bytes());
          tag.serialize(out);
        }
        out.push(Self::End.ty());
      }
    }
  }
}
