use super::defaults::DefaultsConfig;
use super::file::{FileAlgorithmConfig, FileColorConfig, FileConfig, FileTitleConfig};
use super::models::AppConfig;
use crate::cli::StyleArgs;
use crate::error::{CliError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use structdraw::core::utils::translation::TranslationTable;
use structdraw::render::color::PaletteSpec;
use structdraw::render::config::{
    CanvasConfig, ChainStyle, TitlePosition, TitleSpec, default_annotation,
};

/// Merges command-line options, `--set` overrides, the configuration file and the defaults,
/// in that order of precedence.
pub fn build_config(args: &StyleArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = FileConfig::load(args.config.as_deref())?;
    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let (algorithm, translation) =
        merge_algorithm(args.algorithm.as_deref(), file_config.algorithm.take(), &defaults)?;

    let chain_file = file_config.chain.take().unwrap_or_default();
    let show_amino_code = if args.no_amino_code {
        false
    } else {
        chain_file
            .show_amino_code
            .unwrap_or(defaults.show_amino_code)
    };
    let mut annotation = default_annotation();
    annotation.extend(chain_file.annotation.unwrap_or_default());

    let mut color_file = file_config.color.take().unwrap_or_default();
    let palette = resolve_palette(args.palette.as_deref(), &mut color_file)?;

    let style = ChainStyle::builder()
        .shape_size(
            args.shape_size
                .or(chain_file.shape_size)
                .unwrap_or(defaults.shape_size),
        )
        .show_amino_code(show_amino_code)
        .split(args.split.or(chain_file.split))
        .start(args.start.or(chain_file.start).unwrap_or(defaults.start))
        .end(args.end.or(chain_file.end))
        .annotation(annotation)
        .color_mode(
            args.color_mode
                .clone()
                .or(color_file.mode)
                .unwrap_or_else(|| defaults.color_mode.clone()),
        )
        .color_sub_mode(
            args.sub_mode
                .clone()
                .or(color_file.sub_mode)
                .unwrap_or_else(|| defaults.color_sub_mode.clone()),
        )
        .palette(palette)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let title = merge_title(
        args.title.as_deref(),
        args.title_position.as_deref(),
        file_config.title.take().unwrap_or_default(),
        &defaults,
    )?;
    let canvas = CanvasConfig {
        background: file_config.background.unwrap_or(defaults.background),
        title,
    };

    Ok(AppConfig {
        algorithm,
        translation,
        style,
        canvas,
    })
}

/// Resolves the algorithm name and its optional custom code table.
pub fn merge_algorithm(
    cli_name: Option<&str>,
    file_val: Option<FileAlgorithmConfig>,
    defaults: &DefaultsConfig,
) -> Result<(String, Option<TranslationTable>)> {
    let file_val = file_val.unwrap_or_default();
    let name = cli_name
        .map(str::to_string)
        .or(file_val.name)
        .unwrap_or_else(|| defaults.algorithm.clone());

    let Some(entries) = file_val.translation else {
        return Ok((name, None));
    };
    let mut table = HashMap::with_capacity(entries.len());
    for (code, label) in entries {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                table.insert(c, label);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Translation code '{}' must be a single character",
                    code
                )));
            }
        }
    }
    Ok((name, Some(TranslationTable::from_map(&table))))
}

fn resolve_palette(
    cli_path: Option<&Path>,
    color: &mut FileColorConfig,
) -> Result<Option<PaletteSpec>> {
    if let Some(path) = cli_path.or(color.palette_file.as_deref()) {
        return PaletteSpec::load(path)
            .map(Some)
            .map_err(|e| CliError::FileParsing {
                path: path.to_path_buf(),
                source: e.into(),
            });
    }
    match (color.palette.take(), color.bands.take()) {
        (Some(_), Some(_)) => Err(CliError::Config(
            "`color.palette` and `color.bands` cannot both be set".to_string(),
        )),
        (Some(colors), None) => Ok(Some(PaletteSpec::Categorical(colors))),
        (None, Some(bands)) => Ok(Some(PaletteSpec::Bands(bands))),
        (None, None) => Ok(None),
    }
}

fn merge_title(
    cli_text: Option<&str>,
    cli_position: Option<&str>,
    file_val: FileTitleConfig,
    defaults: &DefaultsConfig,
) -> Result<Option<TitleSpec>> {
    let Some(text) = cli_text.map(str::to_string).or(file_val.text) else {
        return Ok(None);
    };
    let position = match cli_position.or(file_val.position.as_deref()) {
        Some(value) => value
            .parse::<TitlePosition>()
            .map_err(|e| CliError::Config(e.to_string()))?,
        None => defaults.title_position,
    };
    let mut title = TitleSpec::new(
        text,
        file_val.font_size.unwrap_or(defaults.title_font_size),
        position,
    );
    if let Some(family) = file_val.font_family {
        title.font_family = family;
    }
    Ok(Some(title))
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "algorithm.name" => {
                config.algorithm.get_or_insert_with(Default::default).name =
                    Some(value_str.to_string());
            }
            "chain.shape-size" => {
                config.chain.get_or_insert_with(Default::default).shape_size =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "chain.split" => {
                config.chain.get_or_insert_with(Default::default).split =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "chain.show-amino-code" => {
                config.chain.get_or_insert_with(Default::default).show_amino_code =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            "chain.start" => {
                config.chain.get_or_insert_with(Default::default).start =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "chain.end" => {
                config.chain.get_or_insert_with(Default::default).end =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "color.mode" => {
                config.color.get_or_insert_with(Default::default).mode =
                    Some(value_str.to_string());
            }
            "color.sub-mode" => {
                config.color.get_or_insert_with(Default::default).sub_mode =
                    Some(value_str.to_string());
            }
            "color.palette-file" => {
                config.color.get_or_insert_with(Default::default).palette_file =
                    Some(value_str.into());
            }
            "title.text" => {
                config.title.get_or_insert_with(Default::default).text =
                    Some(value_str.to_string());
            }
            "title.font-size" => {
                config.title.get_or_insert_with(Default::default).font_size =
                    Some(parse_value(key, value_str, "float")?);
            }
            "title.position" => {
                config.title.get_or_insert_with(Default::default).position =
                    Some(value_str.to_string());
            }
            "background" => {
                config.background = Some(parse_value(key, value_str, "color")?);
            }
            _ => {
                if let Some(attribute) = key.strip_prefix("chain.annotation.") {
                    config
                        .chain
                        .get_or_insert_with(Default::default)
                        .annotation
                        .get_or_insert_with(Default::default)
                        .insert(attribute.to_string(), parse_value(key, value_str, "boolean")?);
                } else {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
    }
    Ok(config)
}
