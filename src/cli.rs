use clap::{Parser, ValueEnum};
use prelude_plus::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum ChannelType {
  U8,
  U16,
  U32,
  U64,
  #[value(alias = "float")]
  F32,
  #[value(alias = "double")]
  F64,
}

impl fmt::Display for ChannelType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::U8 => "u8",
      Self::U16 => "u16",
      Self::U32 => "u32",
      Self::U64 => "u64",
      Self::F32 => "f32",
      Self::F64 => "f64",
    })
  }
}

/// Decodes packed color literals such as 0x883a1215_rgba, 0x883a12_rgb or
/// #abc into the channels of the selected type.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "rgbapack", version, after_help = "Log verbosity is controlled with RUST_LOG (default: warn).")]
pub struct Options {
  /// Channel type to decode into.
  #[arg(long = "type", value_enum, env = "RGBAPACK_TYPE", default_value = "u8")]
  pub channel_type: ChannelType,

  /// Print one JSON object per literal.
  #[arg(long)]
  pub json: bool,

  /// Literals to decode. Read from stdin, one per line, when none are given.
  pub literals: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  fn parse(args: &[&str]) -> Result<Options, clap::Error> {
    Options::try_parse_from(std::iter::once("rgbapack").chain(args.iter().copied()))
  }

  #[test]
  fn command_is_well_formed() { Options::command().debug_assert(); }

  #[test]
  fn defaults() {
    let options = parse(&["0x883a12_rgb"]).unwrap();
    assert_eq!(options.channel_type, ChannelType::U8);
    assert!(!options.json);
    assert_eq!(options.literals, vec!["0x883a12_rgb".to_owned()]);
  }

  #[test]
  fn flags() {
    let options = parse(&["--json", "--type", "u16", "#abc"]).unwrap();
    assert_eq!(options.channel_type, ChannelType::U16);
    assert!(options.json);
    assert_eq!(options.literals, vec!["#abc".to_owned()]);
    assert_eq!(parse(&["--type=f64"]).unwrap().channel_type, ChannelType::F64);
  }

  #[test]
  fn channel_type_aliases() {
    assert_eq!(parse(&["--type", "float"]).unwrap().channel_type, ChannelType::F32);
    assert_eq!(parse(&["--type", "double"]).unwrap().channel_type, ChannelType::F64);
  }

  #[test]
  fn channel_type_falls_back_to_env_var() {
    let command = Options::command();
    let arg = command.get_arguments().find(|arg| arg.get_id() == "channel_type").unwrap();
    assert_eq!(arg.get_env(), Some(std::ffi::OsStr::new("RGBAPACK_TYPE")));
  }

  #[test]
  fn literals_after_double_dash() {
    let options = parse(&["--", "--json"]).unwrap();
    assert!(!options.json);
    assert_eq!(options.literals, vec!["--json".to_owned()]);
  }

  #[test]
  fn bad_arguments() {
    assert!(parse(&["--type"]).is_err());
    assert!(parse(&["--type", "u128"]).is_err());
    assert!(parse(&["--verbose"]).is_err());
  }

  #[test]
  fn channel_type_names_match_display() {
    for ty in ChannelType::value_variants() {
      assert_eq!(<ChannelType as ValueEnum>::from_str(&ty.to_string(), false).unwrap(), *ty);
    }
  }
}
