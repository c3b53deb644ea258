//! Chat messages. These are used for item names and lore, and for short
//! feedback messages shown to a player.
//!
//! A chat message is a list of [`Section`]s. Each section has a text
//! component, and a bunch of styling options. To add a section to a chat
//! message, use [`Chat::add`]. This will add a section with the given text,
//! and no styling options.
//!
//! # Example
//!
//! ```rust
//! use bc_common::util::{Chat, chat::Color};
//!
//! let mut msg = Chat::new("Uses: ".to_string());
//! msg.add("2500".to_string()).color(Color::Gold);
//!
//! let json = msg.to_json();
//! assert_eq!(json, r#"[{"text":"Uses: "},{"text":"2500","color":"gold"}]"#);
//! ```

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_derive::Serialize;
use std::fmt;

impl Default for Chat {
  fn default() -> Self { Chat::empty() }
}

/// This is a chat message. It has a list of sections, and can be serialized
/// to json.
#[derive(Debug, Clone, PartialEq)]
pub struct Chat {
  /// Can never be empty, as it causes too many bugs/edge cases.
  sections: Vec<Section>,
}

impl Chat {
  /// Creates a new Chat message. This will contain a single section, with
  /// the given text set. No formatting will be applied.
  pub fn new<M: Into<String>>(msg: M) -> Self {
    Chat { sections: vec![Section { text: msg.into(), ..Default::default() }] }
  }
  /// Creates a new Chat message, with 1 empty section.
  ///
  /// There are numerous problems with having no sections, so the sections
  /// list can never be empty.
  pub fn empty() -> Self { Chat::new("") }
  /// Creates a new Chat message with a single colored section. Most feedback
  /// messages are exactly this.
  pub fn colored<M: Into<String>>(msg: M, color: Color) -> Self {
    let mut chat = Chat::new(msg);
    chat.sections[0].color(color);
    chat
  }

  /// Adds a new chat section, with the given string. The returned reference
  /// is a reference into self, so it must be dropped before adding another
  /// section.
  pub fn add<M: Into<String>>(&mut self, msg: M) -> &mut Section {
    let s = Section { text: msg.into(), ..Default::default() };
    let idx = self.sections.len();
    self.sections.push(s);
    self.sections.get_mut(idx).unwrap()
  }

  /// Generates a json message that represents this chat message. This is
  /// what the host hands to clients.
  pub fn to_json(&self) -> String { serde_json::to_string(self).unwrap() }

  /// Generates a string for this chat message in plain text (no formatting).
  pub fn to_plain(&self) -> String {
    let mut out = String::new();
    for s in &self.sections {
      out.push_str(&s.text);
    }
    out
  }

  pub fn sections_len(&self) -> usize { self.sections.len() }
  pub fn get_section(&mut self, idx: usize) -> Option<&mut Section> { self.sections.get_mut(idx) }
}

impl Serialize for Chat {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    if self.sections.len() == 1 {
      self.sections[0].serialize(serializer)
    } else {
      let mut s = serializer.serialize_seq(Some(self.sections.len()))?;
      for sec in &self.sections {
        s.serialize_element(sec)?;
      }
      s.end()
    }
  }
}

impl From<&str> for Chat {
  fn from(msg: &str) -> Chat { Chat::new(msg) }
}
impl From<String> for Chat {
  fn from(msg: String) -> Chat { Chat::new(msg) }
}

/// A chat message section. It has some text, and optional styling:
/// - [`bold`](Self::bold): If true, this section will be rendered in bold.
/// - [`italic`](Self::italic): If true, this section will be rendered in
///   italics.
/// - [`underlined`](Self::underlined): If true, this section will be
///   rendered with an underline.
/// - [`color`](Self::color): This is the [`Color`] to render this section
///   in.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct Section {
  text:       String,
  #[serde(skip_serializing_if = "Option::is_none")]
  bold:       Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  italic:     Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  underlined: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  color:      Option<Color>,
}

impl Section {
  /// Renders this section in bold.
  pub fn bold(&mut self) -> &mut Self {
    self.bold = Some(true);
    self
  }
  /// Renders this section in italics.
  pub fn italic(&mut self) -> &mut Self {
    self.italic = Some(true);
    self
  }
  /// Renders this section with an underline.
  pub fn underlined(&mut self) -> &mut Self {
    self.underlined = Some(true);
    self
  }
  /// Renders this section in the given color.
  pub fn color(&mut self, color: Color) -> &mut Self {
    self.color = Some(color);
    self
  }
}

/// A chat color. The `Custom` variant is an RGB hex string, and only works
/// on newer clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
  Black,
  DarkBlue,
  DarkGreen,
  DarkAqua,
  DarkRed,
  Purple,
  Gold,
  Gray,
  DarkGray,
  Blue,
  BrightGreen,
  Cyan,
  Red,
  Pink,
  Yellow,
  White,
  Custom(String),
}

impl Color {
  /// Creates a new rgb color. This is only valid for newer clients. For
  /// older clients, this will render as white.
  pub fn rgb(r: u8, g: u8, b: u8) -> Self { Color::Custom(format!("#{r:02x}{g:02x}{b:02x}")) }

  /// Converts the color to a string. This string should be used in chat
  /// json.
  pub fn to_str(&self) -> &str {
    match self {
      Self::Black => "black",
      Self::DarkBlue => "dark_blue",
      Self::DarkGreen => "dark_green",
      Self::DarkAqua => "dark_aqua",
      Self::DarkRed => "dark_red",
      Self::Purple => "dark_purple",
      Self::Gold => "gold",
      Self::Gray => "gray",
      Self::DarkGray => "dark_gray",
      Self::Blue => "blue",
      Self::BrightGreen => "green",
      Self::Cyan => "aqua",
      Self::Red => "red",
      Self::Pink => "pink",
      Self::Yellow => "yellow",
      Self::White => "white",
      Self::Custom(v) => v,
    }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.to_str()) }
}

impl Serialize for Color {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(self.to_str())
  }
}
