//! End-to-end tests for field mask path computation.
//!
//! Each test parses a schema and a query, picks the selection set of one
//! field the way a resolver would see it, and checks the resulting paths.

use fieldmask_core::{
    AbstractTypeContext, ExecutableDocument, FieldDefinition, FieldMaskError, FieldMaskOptions,
    ResolveContext, Result, SchemaIndex, SelectionSet, TypeGraph, compute_field_mask_paths,
    join_path, merged_field_selection_set, parse_query,
};

const SCHEMA: &str = r#"
    type Query {
        item: Item
        parent: Parent
        search: SearchResult
        owner: Owner
    }

    type Item {
        fieldA: String
        fieldB: Int
        nested: Item
    }

    type Parent {
        parentField: String
        child: Child
    }

    type Child {
        scalarA: String
        scalarB: String
    }

    type TypeX { f1: String f2: String }
    type TypeY { g1: String g2: String }
    union SearchResult = TypeX | TypeY

    interface Animal { name: String }
    type Dog implements Animal { name: String breed: String }
    type Cat implements Animal { name: String indoor: Boolean }

    type Owner {
        id: ID!
        pet: Animal
    }
"#;

struct Fixture {
    schema: SchemaIndex,
    document: ExecutableDocument,
}

impl Fixture {
    fn new(query: &str) -> Self {
        Self {
            schema: SchemaIndex::from_sdl(SCHEMA).expect("schema should parse"),
            document: parse_query(query).expect("query should parse"),
        }
    }

    fn selection(&self, field: &str) -> SelectionSet {
        merged_field_selection_set(&self.document, None, field).expect("field should exist")
    }

    fn paths_with(
        &self,
        field: &str,
        type_name: &str,
        options: &FieldMaskOptions<'_>,
    ) -> Result<Vec<String>> {
        let selection = self.selection(field);
        let context = ResolveContext::new(&self.schema, &self.document, &selection);
        compute_field_mask_paths(type_name, &context, options)
    }

    fn paths(&self, field: &str, type_name: &str) -> Vec<String> {
        self.paths_with(field, type_name, &FieldMaskOptions::new())
            .expect("paths should compute")
    }
}

#[test]
fn scalar_fields_in_selection_order() {
    let fixture = Fixture::new("{ item { fieldB fieldA } }");

    assert_eq!(fixture.paths("item", "Item"), vec!["fieldB", "fieldA"]);

    let fixture = Fixture::new("{ item { fieldA fieldB } }");
    assert_eq!(fixture.paths("item", "Item"), vec!["fieldA", "fieldB"]);
}

#[test]
fn fragment_spread_keeps_its_position() {
    let fixture = Fixture::new(
        r#"
        { item { ...ItemA fieldB } }
        fragment ItemA on Item { fieldA }
        "#,
    );

    assert_eq!(fixture.paths("item", "Item"), vec!["fieldA", "fieldB"]);
}

#[test]
fn nested_object_emits_only_leaf_paths() {
    let fixture = Fixture::new("{ parent { parentField child { scalarA scalarB } } }");

    assert_eq!(
        fixture.paths("parent", "Parent"),
        vec!["parentField", "child.scalarA", "child.scalarB"]
    );
}

#[test]
fn union_selection_resolved_per_concrete_type() {
    let fixture = Fixture::new(
        r#"
        { search { __typename ... on TypeX { f1 } ...FragY } }
        fragment FragY on TypeY { g1 g2 }
        "#,
    );

    assert_eq!(fixture.paths("search", "TypeX"), vec!["f1"]);
    assert_eq!(fixture.paths("search", "TypeY"), vec!["g1", "g2"]);
}

#[test]
fn abstract_field_without_hook_is_absent() {
    let fixture = Fixture::new("{ owner { id pet { name ... on Dog { breed } } } }");

    assert_eq!(fixture.paths("owner", "Owner"), vec!["id"]);
}

#[test]
fn abstract_field_with_hook_prefixes_each_type() {
    let fixture = Fixture::new(
        r#"
        { owner { id pet { name ... on Dog { breed } ...CatFields } } }
        fragment CatFields on Cat { indoor }
        "#,
    );
    let hook = |context: &AbstractTypeContext<'_>,
                compute: &dyn Fn(&str) -> Result<Vec<String>>|
     -> Result<Vec<String>> {
        let mut paths = Vec::new();
        for &ty in &context.possible_types {
            let prefix = format!("on{ty}");
            paths.extend(compute(ty)?.iter().map(|p| join_path(&prefix, p)));
        }
        Ok(paths)
    };
    let options = FieldMaskOptions::new().with_abstract_types(&hook);

    assert_eq!(
        fixture.paths_with("owner", "Owner", &options).unwrap(),
        vec![
            "id",
            "pet.onDog.name",
            "pet.onDog.breed",
            "pet.onCat.name",
            "pet.onCat.indoor"
        ]
    );
}

#[test]
fn unknown_root_type_fails() {
    let fixture = Fixture::new("{ item { fieldA } }");

    for type_name in ["Missing", "SearchResult", "Animal", "String"] {
        let err = fixture
            .paths_with("item", type_name, &FieldMaskOptions::new())
            .unwrap_err();
        assert!(
            matches!(err, FieldMaskError::UnknownType { ref name } if name == type_name),
            "{type_name}: {err}"
        );
    }
}

#[test]
fn aliases_do_not_change_segments() {
    let fixture = Fixture::new("{ item { a: fieldA nested { b: fieldB } } }");

    assert_eq!(fixture.paths("item", "Item"), vec!["fieldA", "nested.fieldB"]);
}

#[test]
fn typename_is_never_emitted() {
    let fixture = Fixture::new("{ parent { __typename child { __typename scalarA } } }");
    let everything = |field: &FieldDefinition, _: &str, _: &dyn TypeGraph| {
        Some(field.name.node.to_string())
    };
    let options = FieldMaskOptions::new().with_field_names(&everything);

    let paths = fixture.paths_with("parent", "Parent", &options).unwrap();
    assert_eq!(paths, vec!["child.scalarA"]);
    assert!(paths.iter().all(|p| !p.contains("__typename")));
}

#[test]
fn excluded_field_drops_its_subtree_only() {
    let fixture = Fixture::new("{ parent { parentField child { scalarA } } }");
    let without_child = |field: &FieldDefinition, _: &str, _: &dyn TypeGraph| {
        let name = field.name.node.as_str();
        (name != "child").then(|| name.to_string())
    };
    let options = FieldMaskOptions::new().with_field_names(&without_child);

    assert_eq!(
        fixture.paths_with("parent", "Parent", &options).unwrap(),
        vec!["parentField"]
    );
}

#[test]
fn renamed_segments_apply_at_every_level() {
    let fixture = Fixture::new("{ parent { child { scalarA } } }");
    let snake = |field: &FieldDefinition, parent: &str, _: &dyn TypeGraph| {
        Some(format!("{}_{}", parent.to_lowercase(), field.name.node))
    };
    let options = FieldMaskOptions::new().with_field_names(&snake);

    assert_eq!(
        fixture.paths_with("parent", "Parent", &options).unwrap(),
        vec!["parent_child.child_scalarA"]
    );
}

#[test]
fn duplicates_are_kept_in_occurrence_order() {
    let fixture = Fixture::new(
        r#"
        { item { ...A fieldB ...B } }
        fragment A on Item { fieldA }
        fragment B on Item { fieldA }
        "#,
    );

    assert_eq!(
        fixture.paths("item", "Item"),
        vec!["fieldA", "fieldB", "fieldA"]
    );
}

#[test]
fn empty_selection_yields_no_paths() {
    let fixture = Fixture::new("{ item { fieldA } }");
    let empty = SelectionSet { items: Vec::new() };
    let context = ResolveContext::new(&fixture.schema, &fixture.document, &empty);

    let paths = compute_field_mask_paths("Item", &context, &FieldMaskOptions::new()).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn results_are_deterministic() {
    let fixture = Fixture::new(
        r#"
        { parent { child { ...C } parentField } }
        fragment C on Child { scalarB scalarA }
        "#,
    );

    let first = fixture.paths("parent", "Parent");
    for _ in 0..5 {
        assert_eq!(fixture.paths("parent", "Parent"), first);
    }
    assert_eq!(first, vec!["child.scalarB", "child.scalarA", "parentField"]);
}
