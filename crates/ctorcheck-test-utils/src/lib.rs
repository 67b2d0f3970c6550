//! Testing utilities for the ctorcheck workspace
//!
//! A wiki-parser-shaped factory/product pair exercising every checker
//! path: the modern call shape, an appended optional namespace-info
//! capability, a deprecated legacy shape that drops its raw-config slot,
//! and deliberately broken variants for the failure paths.

#![allow(missing_docs)]

use ctorcheck_core::{
    Construction, ConstructionError, FieldSnapshot, LegacyArgSet, ProductFactory,
};
use ctorcheck_mock::{MockArgumentSet, MockValue, OptionsStub, StubRegistry};
use ctorcheck_schema::{CapabilityId, ConstructorSchema, ParamKind};
use std::sync::Arc;

pub fn magic_word_factory() -> CapabilityId {
    CapabilityId::new("magic-word-factory")
}

pub fn language() -> CapabilityId {
    CapabilityId::new("language")
}

pub fn special_page_factory() -> CapabilityId {
    CapabilityId::new("special-page-factory")
}

pub fn site_config() -> CapabilityId {
    CapabilityId::new("site-config")
}

pub fn link_renderer_factory() -> CapabilityId {
    CapabilityId::new("link-renderer-factory")
}

pub fn namespace_info() -> CapabilityId {
    CapabilityId::new("namespace-info")
}

/// Factory fixture producing a `WikitextParser`
///
/// All parser constructor parameters are optional in the system this
/// models, so forgetting to thread one through the factory would go
/// unnoticed at runtime; the checker exists to catch exactly that.
pub struct WikitextParserFactory {
    factory_schema: ConstructorSchema,
    product_schema: ConstructorSchema,
    store_link_renderer: bool,
}

impl WikitextParserFactory {
    /// The modern eight-parameter call shape
    pub fn modern() -> Self {
        let factory_schema = Self::base_schema(false);
        let product_schema = Self::product_schema_for(&factory_schema);
        Self {
            factory_schema,
            product_schema,
            store_link_renderer: true,
        }
    }

    /// Modern shape plus the appended optional namespace-info capability
    pub fn with_namespace_info() -> Self {
        let factory_schema = Self::base_schema(true);
        let product_schema = Self::product_schema_for(&factory_schema);
        Self {
            factory_schema,
            product_schema,
            store_link_renderer: true,
        }
    }

    /// A miswired variant: the product schema forgot the factory handle
    /// slot, so parameter counts come out equal
    pub fn mismatched() -> Self {
        let factory_schema = Self::base_schema(false);
        let mut product_schema = ConstructorSchema::new("WikitextParser");
        for param in factory_schema.params() {
            product_schema.push(param.name.clone(), param.kind.clone());
        }
        Self {
            factory_schema,
            product_schema,
            store_link_renderer: true,
        }
    }

    /// A variant declaring a parameter kind no synthesis rule covers
    pub fn with_unrecognized_param() -> Self {
        let factory_schema =
            Self::base_schema(false).with_param("handle", ParamKind::Other("resource handle".into()));
        let product_schema = Self::product_schema_for(&factory_schema);
        Self {
            factory_schema,
            product_schema,
            store_link_renderer: true,
        }
    }

    /// A defective variant that never stores the link renderer factory
    pub fn forgetful() -> Self {
        let mut fixture = Self::modern();
        fixture.store_link_renderer = false;
        fixture
    }

    fn base_schema(with_namespace_info: bool) -> ConstructorSchema {
        let mut schema = ConstructorSchema::new("WikitextParserFactory")
            .with_param("options", ParamKind::Options)
            .with_param("interwiki_prefixes", ParamKind::Sequence)
            .with_param(
                "magic_word_factory",
                ParamKind::Capability(magic_word_factory()),
            )
            .with_param("content_language", ParamKind::Capability(language()))
            .with_param("url_protocols", ParamKind::Untyped)
            .with_param(
                "special_page_factory",
                ParamKind::Capability(special_page_factory()),
            )
            .with_param("site_config", ParamKind::Capability(site_config()))
            .with_param(
                "link_renderer_factory",
                ParamKind::Capability(link_renderer_factory()),
            );
        if with_namespace_info {
            schema.push("namespace_info", ParamKind::Capability(namespace_info()));
        }
        schema
    }

    fn product_schema_for(factory_schema: &ConstructorSchema) -> ConstructorSchema {
        let mut schema = ConstructorSchema::new("WikitextParser").with_param(
            "factory",
            ParamKind::Capability(CapabilityId::new("parser-factory")),
        );
        for param in factory_schema.params() {
            schema.push(param.name.clone(), param.kind.clone());
        }
        schema
    }

    fn options_tag(args: &MockArgumentSet, position: usize) -> Result<String, ConstructionError> {
        match args.get(position).map(|arg| &arg.value) {
            Some(MockValue::Options(options)) => Ok(options.tag().to_string()),
            _ => Err(ConstructionError::Rejected {
                owner: "WikitextParser".to_string(),
                position,
                message: "expected parser options".to_string(),
            }),
        }
    }
}

impl ProductFactory for WikitextParserFactory {
    fn factory_schema(&self) -> &ConstructorSchema {
        &self.factory_schema
    }

    fn product_schema(&self) -> &ConstructorSchema {
        &self.product_schema
    }

    fn create(&self, args: &MockArgumentSet) -> Result<Construction, ConstructionError> {
        let expected = self.factory_schema.len();
        if args.len() != expected {
            return Err(ConstructionError::ArgumentCount {
                owner: "WikitextParser".to_string(),
                expected,
                actual: args.len(),
            });
        }

        let options_tag = Self::options_tag(args, 0)?;
        let mut fields = FieldSnapshot::new();
        // The options object is consumed: only derived state is kept.
        fields.insert(
            "strip_state",
            MockValue::Text(Arc::from(format!("strip state from {options_tag}"))),
        );
        for arg in args.iter().skip(1) {
            let name = self
                .factory_schema
                .get(arg.position)
                .map_or("unknown", |p| p.name.as_str());
            if name == "link_renderer_factory" && !self.store_link_renderer {
                continue;
            }
            fields.insert(name, arg.value.clone());
        }

        Ok(Construction::new(fields))
    }

    fn create_legacy(&self, args: &MockArgumentSet) -> Result<Construction, ConstructionError> {
        // Historical shape: no leading options object, a raw site-config
        // value at position 5, optional trailing namespace-info.
        if args.len() != 7 && args.len() != 8 {
            return Err(ConstructionError::ArgumentCount {
                owner: "WikitextParser".to_string(),
                expected: 7,
                actual: args.len(),
            });
        }

        let raw_config = args.get(5).map(|arg| &arg.value);
        if !matches!(raw_config, Some(MockValue::Capability(_))) {
            return Err(ConstructionError::Rejected {
                owner: "WikitextParser".to_string(),
                position: 5,
                message: "expected raw site config".to_string(),
            });
        }

        let mut fields = FieldSnapshot::new();
        // Positions 0 and 5 are consumed into derived options and never
        // stored verbatim.
        fields.insert(
            "strip_state",
            MockValue::Text(Arc::from("strip state from raw site config")),
        );
        let legacy_names = [
            "interwiki_prefixes",
            "magic_word_factory",
            "content_language",
            "url_protocols",
            "special_page_factory",
            "site_config",
            "link_renderer_factory",
            "namespace_info",
        ];
        for arg in args.iter() {
            if arg.position == 0 || arg.position == 5 {
                continue;
            }
            fields.insert(legacy_names[arg.position], arg.value.clone());
        }

        Ok(Construction::new(fields).with_deprecation(
            "WikitextParserFactory constructed with a raw site-config argument; \
             pass parser options instead",
        ))
    }
}

/// Build the supported historical argument orderings from literal values
pub fn legacy_argument_sets(registry: &StubRegistry) -> Vec<LegacyArgSet> {
    vec![
        LegacyArgSet::new("args_without_namespace_info", legacy_args(registry, false)),
        LegacyArgSet::new("args_with_namespace_info", legacy_args(registry, true)),
    ]
}

fn legacy_args(registry: &StubRegistry, with_namespace_info: bool) -> MockArgumentSet {
    let stub = |id: CapabilityId| {
        MockValue::Capability(
            registry
                .instantiate(&id)
                .unwrap_or_else(|| panic!("fixture capability '{id}' not registered")),
        )
    };

    let mut args = MockArgumentSet::new();
    args.push(
        ParamKind::Sequence,
        MockValue::Sequence(Arc::from(vec!["w".to_string()])),
    );
    args.push(
        ParamKind::Capability(magic_word_factory()),
        stub(magic_word_factory()),
    );
    args.push(ParamKind::Capability(language()), stub(language()));
    args.push(
        ParamKind::Untyped,
        MockValue::Text(Arc::from("http:// https:// irc://")),
    );
    args.push(
        ParamKind::Capability(special_page_factory()),
        stub(special_page_factory()),
    );
    args.push(ParamKind::Capability(site_config()), stub(site_config()));
    args.push(
        ParamKind::Capability(link_renderer_factory()),
        stub(link_renderer_factory()),
    );
    if with_namespace_info {
        args.push(ParamKind::Capability(namespace_info()), stub(namespace_info()));
    }
    args
}

/// A handcrafted options-led argument set matching the modern schema
pub fn modern_args(registry: &StubRegistry) -> MockArgumentSet {
    let stub = |id: CapabilityId| {
        MockValue::Capability(
            registry
                .instantiate(&id)
                .unwrap_or_else(|| panic!("fixture capability '{id}' not registered")),
        )
    };

    let mut args = MockArgumentSet::new();
    args.push(
        ParamKind::Options,
        MockValue::Options(Arc::new(OptionsStub::new("fixture options"))),
    );
    args.push(
        ParamKind::Sequence,
        MockValue::Sequence(Arc::from(vec!["w".to_string()])),
    );
    args.push(
        ParamKind::Capability(magic_word_factory()),
        stub(magic_word_factory()),
    );
    args.push(ParamKind::Capability(language()), stub(language()));
    args.push(
        ParamKind::Untyped,
        MockValue::Text(Arc::from("http:// https://")),
    );
    args.push(
        ParamKind::Capability(special_page_factory()),
        stub(special_page_factory()),
    );
    args.push(ParamKind::Capability(site_config()), stub(site_config()));
    args.push(
        ParamKind::Capability(link_renderer_factory()),
        stub(link_renderer_factory()),
    );
    args
}
