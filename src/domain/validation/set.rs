// src/domain/validation/set.rs
use super::rules::{ParseError, RuleName, ValidatorConfig};
use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Validators configured on one property, at most one per rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatorSet(BTreeMap<RuleName, ValidatorConfig>);

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, config: ValidatorConfig) -> Self {
        self.insert(config);
        self
    }

    pub fn insert(&mut self, config: ValidatorConfig) -> Option<ValidatorConfig> {
        self.0.insert(config.rule(), config)
    }

    pub fn remove(&mut self, rule: RuleName) -> Option<ValidatorConfig> {
        self.0.remove(&rule)
    }

    pub fn get(&self, rule: RuleName) -> Option<&ValidatorConfig> {
        self.0.get(&rule)
    }

    pub fn contains(&self, rule: RuleName) -> bool {
        self.0.contains_key(&rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidatorConfig> {
        self.0.values()
    }

    pub fn rules(&self) -> impl Iterator<Item = RuleName> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_raw(&self) -> Map<String, Value> {
        self.0
            .iter()
            .map(|(rule, config)| (rule.as_str().to_owned(), config.to_raw()))
            .collect()
    }

    pub fn from_raw(raw: &Map<String, Value>) -> Result<Self, ParseError> {
        raw.iter()
            .map(|(rule, config)| ValidatorConfig::parse(rule, config))
            .collect::<Result<Vec<_>, _>>()
            .map(|configs| configs.into_iter().fold(Self::new(), Self::with))
    }
}

impl Serialize for ValidatorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rule, config) in &self.0 {
            map.serialize_entry(rule.as_str(), &config.to_raw())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValidatorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_raw(&raw).map_err(serde::de::Error::custom)
    }
}
