use crate::cli::ChannelType;
use cardboard_color::*;
use prelude_plus::*;
use serde::Serialize;

/// One decoded literal, as printed by `rgbapack`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<T> {
  pub literal: String,
  pub kind: &'static str,
  pub packed: String,
  pub channel_type: String,
  pub channels: GenericColor<T>,
}

impl<T: Channel> Report<T> {
  pub fn decode(literal: &str, channel_type: ChannelType) -> AnyResult<Self> {
    let (packed, kind) = parse_literal_kind(literal)
      .with_context(|| format!("Failed to parse the color literal '{}'", literal.trim()))?;
    let channels = GenericColor::<T>::from(packed);
    debug!("{} -> {:#010x} -> {:?}", literal.trim(), packed, channels);
    Ok(Self {
      literal: literal.trim().to_owned(),
      kind: kind.name(),
      packed: format!("{:#010x}", packed),
      channel_type: channel_type.to_string(),
      channels,
    })
  }
}

impl<T: fmt::Debug> fmt::Display for Report<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {:?}", self.packed, self.channels)
  }
}

/// Decodes `literal` into channels of the requested type and renders one
/// line of output.
pub fn render(literal: &str, channel_type: ChannelType, json: bool) -> AnyResult<String> {
  fn render_as<T: Channel + Serialize>(
    literal: &str,
    channel_type: ChannelType,
    json: bool,
  ) -> AnyResult<String> {
    let report = Report::<T>::decode(literal, channel_type)?;
    if json {
      serde_json::to_string(&report).context("Failed to serialize the report")
    } else {
      Ok(report.to_string())
    }
  }

  match channel_type {
    ChannelType::U8 => render_as::<u8>(literal, channel_type, json),
    ChannelType::U16 => render_as::<u16>(literal, channel_type, json),
    ChannelType::U32 => render_as::<u32>(literal, channel_type, json),
    ChannelType::U64 => render_as::<u64>(literal, channel_type, json),
    ChannelType::F32 => render_as::<f32>(literal, channel_type, json),
    ChannelType::F64 => render_as::<f64>(literal, channel_type, json),
  }
}
