// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and message lookup.

use crate::config::Config;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

/// Languages written right-to-left.
const RTL_LANGUAGES: [&str; 4] = ["ar", "fa", "he", "ur"];

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Loads the embedded translations, then any `.ftl` files found in
    /// `i18n_dir` (which replace embedded locales of the same name), and
    /// resolves the active locale from CLI, config and OS settings.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: Vec<(LanguageIdentifier, String)> = Asset::iter()
            .filter_map(|file| {
                let locale = locale_from_filename(file.as_ref())?;
                let content = Asset::get(file.as_ref())?;
                Some((locale, String::from_utf8_lossy(content.data.as_ref()).into_owned()))
            })
            .collect();

        if let Some(dir) = i18n_dir {
            match read_locale_dir(Path::new(&dir)) {
                Ok(extra) => {
                    for (locale, source) in extra {
                        sources.retain(|(existing, _)| existing != &locale);
                        sources.push((locale, source));
                    }
                }
                Err(err) => tracing::warn!(dir = %dir, %err, "ignoring custom translations"),
            }
        }

        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();
        for (locale, source) in sources {
            match build_bundle(&locale, source) {
                Ok(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                Err(err) => tracing::warn!(%locale, %err, "skipping broken translation"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);
        tracing::debug!(locale = %current_locale, "resolved locale");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Switches to the next available locale, wrapping around.
    pub fn cycle_locale(&mut self) {
        if self.available_locales.is_empty() {
            return;
        }
        let position = self
            .available_locales
            .iter()
            .position(|locale| locale == &self.current_locale)
            .unwrap_or(0);
        let next = self.available_locales[(position + 1) % self.available_locales.len()].clone();
        self.set_locale(next);
    }

    /// Returns whether the active locale is written right-to-left.
    pub fn is_rtl(&self) -> bool {
        RTL_LANGUAGES.contains(&self.current_locale.language.as_str())
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

/// Reads every `<locale>.ftl` file of a directory.
fn read_locale_dir(dir: &Path) -> Result<Vec<(LanguageIdentifier, String)>> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let Some(locale) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(locale_from_filename)
        else {
            continue;
        };
        sources.push((locale, fs::read_to_string(&path)?));
    }
    Ok(sources)
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Result<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        Error::I18n(format!("{} parse error(s) in {}", errors.len(), locale))
    })?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Arguments are plain text; bidi isolation marks would show up in the UI.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::I18n(format!("{} duplicate message(s)", errors.len())))?;
    Ok(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| match_available(&wanted, available))
}

/// Exact match first, then a locale sharing the same language subtag.
fn match_available(
    wanted: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|locale| *locale == wanted)
        .or_else(|| {
            available
                .iter()
                .find(|locale| locale.language == wanted.language)
        })
        .cloned()
}
