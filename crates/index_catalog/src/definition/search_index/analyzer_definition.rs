/// Built-in analyzers. Their names can't be defined by users and are never
/// checked for conflicts or resolution.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    strum::EnumIter,
)]
pub enum StockAnalyzer {
    #[strum(serialize = "lucene.standard")]
    Standard,
    #[strum(serialize = "lucene.simple")]
    Simple,
    #[strum(serialize = "lucene.whitespace")]
    Whitespace,
    #[strum(serialize = "lucene.keyword")]
    Keyword,
    #[strum(serialize = "lucene.arabic")]
    Arabic,
    #[strum(serialize = "lucene.armenian")]
    Armenian,
    #[strum(serialize = "lucene.basque")]
    Basque,
    #[strum(serialize = "lucene.bengali")]
    Bengali,
    #[strum(serialize = "lucene.brazilian")]
    Brazilian,
    #[strum(serialize = "lucene.bulgarian")]
    Bulgarian,
    #[strum(serialize = "lucene.catalan")]
    Catalan,
    #[strum(serialize = "lucene.chinese")]
    Chinese,
    #[strum(serialize = "lucene.cjk")]
    Cjk,
    #[strum(serialize = "lucene.czech")]
    Czech,
    #[strum(serialize = "lucene.danish")]
    Danish,
    #[strum(serialize = "lucene.dutch")]
    Dutch,
    #[strum(serialize = "lucene.english")]
    English,
    #[strum(serialize = "lucene.finnish")]
    Finnish,
    #[strum(serialize = "lucene.french")]
    French,
    #[strum(serialize = "lucene.galician")]
    Galician,
    #[strum(serialize = "lucene.german")]
    German,
    #[strum(serialize = "lucene.greek")]
    Greek,
    #[strum(serialize = "lucene.hindi")]
    Hindi,
    #[strum(serialize = "lucene.hungarian")]
    Hungarian,
    #[strum(serialize = "lucene.indonesian")]
    Indonesian,
    #[strum(serialize = "lucene.irish")]
    Irish,
    #[strum(serialize = "lucene.italian")]
    Italian,
    #[strum(serialize = "lucene.japanese")]
    Japanese,
    #[strum(serialize = "lucene.korean")]
    Korean,
    #[strum(serialize = "lucene.kuromoji")]
    Kuromoji,
    #[strum(serialize = "lucene.latvian")]
    Latvian,
    #[strum(serialize = "lucene.lithuanian")]
    Lithuanian,
    #[strum(serialize = "lucene.morfologik")]
    Morfologik,
    #[strum(serialize = "lucene.nori")]
    Nori,
    #[strum(serialize = "lucene.norwegian")]
    Norwegian,
    #[strum(serialize = "lucene.persian")]
    Persian,
    #[strum(serialize = "lucene.polish")]
    Polish,
    #[strum(serialize = "lucene.portuguese")]
    Portuguese,
    #[strum(serialize = "lucene.romanian")]
    Romanian,
    #[strum(serialize = "lucene.russian")]
    Russian,
    #[strum(serialize = "lucene.smartcn")]
    Smartcn,
    #[strum(serialize = "lucene.sorani")]
    Sorani,
    #[strum(serialize = "lucene.spanish")]
    Spanish,
    #[strum(serialize = "lucene.swedish")]
    Swedish,
    #[strum(serialize = "lucene.thai")]
    Thai,
    #[strum(serialize = "lucene.turkish")]
    Turkish,
    #[strum(serialize = "lucene.ukrainian")]
    Ukrainian,
}

impl StockAnalyzer {
    pub fn is_stock(name: &str) -> bool {
        name.parse::<StockAnalyzer>().is_ok()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// How an analyzer's output is shaped. Synonym expansion and autocomplete
/// assume a single linear token sequence, so they reject `Graph` analyzers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "testing"), derive(proptest_derive::Arbitrary))]
pub enum TokenStreamType {
    Stream,

    /// Emits multiple overlapping token paths.
    Graph,
}

/// An analyzer defined inside a single index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomAnalyzerDefinition {
    pub name: String,

    /// Classification resolved by the analyzer registry from the analyzer's
    /// tokenizer and token filters.
    pub token_stream_type: TokenStreamType,
}

/// A catalog-scoped analyzer shared across indexes by name. Overridden
/// analyzers share one namespace with every index's custom analyzers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverriddenAnalyzerDefinition {
    pub name: String,
    pub base_analyzer: StockAnalyzer,
    pub token_stream_type: TokenStreamType,
}

/// An overridden analyzer as registered, with the outcome of its own
/// validation. Invalid analyzers still occupy their name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverriddenAnalyzer {
    Valid(OverriddenAnalyzerDefinition),
    Invalid { name: String, reason: String },
}

impl OverriddenAnalyzer {
    pub fn name(&self) -> &str {
        match self {
            OverriddenAnalyzer::Valid(definition) => &definition.name,
            OverriddenAnalyzer::Invalid { name, .. } => name,
        }
    }

    pub fn as_valid(&self) -> Option<&OverriddenAnalyzerDefinition> {
        match self {
            OverriddenAnalyzer::Valid(definition) => Some(definition),
            OverriddenAnalyzer::Invalid { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymMappingDefinition {
    pub name: String,
    pub analyzer: String,

    /// Collection holding the synonym documents.
    pub source_collection: String,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::StockAnalyzer;

    #[test]
    fn test_stock_analyzer_names_roundtrip() {
        for analyzer in StockAnalyzer::iter() {
            assert!(analyzer.name().starts_with("lucene."));
            assert_eq!(analyzer.name().parse::<StockAnalyzer>().ok(), Some(analyzer));
        }
        assert!(StockAnalyzer::is_stock("lucene.standard"));
        assert!(!StockAnalyzer::is_stock("standard"));
        assert!(!StockAnalyzer::is_stock("lucene.custom"));
    }
}
