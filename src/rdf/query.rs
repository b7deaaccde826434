//! SPARQL SELECT evaluation over an [`RdfStore`]
//!
//! Queries are parsed with spargebra and evaluated directly against the
//! store's triple index. Basic graph patterns, joins, projection, DISTINCT,
//! REDUCED, GROUP BY without aggregates and LIMIT/OFFSET are supported,
//! which covers the lookups the reconciliation issues. Anything else is
//! reported as [`QueryError::Unsupported`].

use super::store::RdfStore;
use super::types::{NamedNode, RdfObject, TriplePattern};
use crate::backend::QueryRunner;
use indexmap::IndexMap;
use spargebra::algebra::GraphPattern;
use spargebra::term::{NamedNodePattern, TermPattern, TriplePattern as SparqlTriplePattern};
use spargebra::Query;
use thiserror::Error;
use tracing::{debug, warn};

/// Query errors
#[derive(Error, Debug)]
pub enum QueryError {
    /// Syntax error
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Unsupported feature
    #[error("Unsupported feature: {0}")]
    Unsupported(String),
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Query solution (variable bindings)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySolution {
    /// Variable name → RDF term bindings, in binding order
    pub bindings: IndexMap<String, RdfObject>,
}

impl QuerySolution {
    /// Create a new query solution
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a binding
    pub fn get(&self, variable: &str) -> Option<&RdfObject> {
        self.bindings.get(variable)
    }

    /// Add a binding
    pub fn bind(&mut self, variable: impl Into<String>, term: RdfObject) {
        self.bindings.insert(variable.into(), term);
    }

    /// Bind a variable unless it already holds a different value
    fn try_bind(&mut self, slot: &Slot, term: RdfObject) -> bool {
        match slot {
            Slot::Bound(_) => true,
            Slot::Free(name) => match self.bindings.get(name) {
                Some(existing) => existing == &term,
                None => {
                    self.bindings.insert(name.clone(), term);
                    true
                }
            },
        }
    }

    /// Merge with another solution if they agree on shared variables
    fn merge(&self, other: &QuerySolution) -> Option<QuerySolution> {
        let mut merged = self.clone();
        for (name, term) in &other.bindings {
            match merged.bindings.get(name) {
                Some(existing) if existing != term => return None,
                Some(_) => {}
                None => {
                    merged.bindings.insert(name.clone(), term.clone());
                }
            }
        }
        Some(merged)
    }
}

/// A pattern position: either a concrete term or a variable name
enum Slot {
    Bound(RdfObject),
    Free(String),
}

impl RdfStore {
    /// Execute a SPARQL SELECT query
    pub fn execute_select(&self, query: &str) -> QueryResult<Vec<QuerySolution>> {
        let parsed = Query::parse(query, None).map_err(|e| QueryError::Syntax(e.to_string()))?;
        match parsed {
            Query::Select { pattern, .. } => {
                let solutions = evaluate(self, &pattern)?;
                debug!("SELECT returned {} solutions", solutions.len());
                Ok(solutions)
            }
            _ => Err(QueryError::Unsupported(
                "only SELECT queries are evaluated".to_string(),
            )),
        }
    }
}

impl QueryRunner for RdfStore {
    fn select(&self, query: &str) -> Vec<QuerySolution> {
        self.execute_select(query).unwrap_or_else(|e| {
            warn!("Query failed, treating as no results: {}", e);
            Vec::new()
        })
    }
}

fn evaluate(store: &RdfStore, pattern: &GraphPattern) -> QueryResult<Vec<QuerySolution>> {
    match pattern {
        GraphPattern::Bgp { patterns } => {
            let mut solutions = vec![QuerySolution::new()];
            for triple_pattern in patterns {
                let mut next = Vec::new();
                for solution in &solutions {
                    next.extend(match_pattern(store, triple_pattern, solution)?);
                }
                solutions = next;
                if solutions.is_empty() {
                    break;
                }
            }
            Ok(solutions)
        }
        GraphPattern::Join { left, right } => {
            let left = evaluate(store, left)?;
            let right = evaluate(store, right)?;
            Ok(left
                .iter()
                .flat_map(|l| right.iter().filter_map(move |r| l.merge(r)))
                .collect())
        }
        GraphPattern::Project { inner, variables } => {
            let names: Vec<&str> = variables.iter().map(|v| v.as_str()).collect();
            Ok(evaluate(store, inner)?
                .into_iter()
                .map(|solution| project(solution, &names))
                .collect())
        }
        GraphPattern::Group {
            inner,
            variables,
            aggregates,
        } => {
            if !aggregates.is_empty() {
                return Err(QueryError::Unsupported("aggregates".to_string()));
            }
            let names: Vec<&str> = variables.iter().map(|v| v.as_str()).collect();
            let grouped = evaluate(store, inner)?
                .into_iter()
                .map(|solution| project(solution, &names))
                .collect();
            Ok(distinct(grouped))
        }
        GraphPattern::Distinct { inner } | GraphPattern::Reduced { inner } => {
            Ok(distinct(evaluate(store, inner)?))
        }
        GraphPattern::Slice {
            inner,
            start,
            length,
        } => {
            let solutions = evaluate(store, inner)?.into_iter().skip(*start);
            Ok(match length {
                Some(length) => solutions.take(*length).collect(),
                None => solutions.collect(),
            })
        }
        other => Err(QueryError::Unsupported(format!("{:?}", other))),
    }
}

fn match_pattern(
    store: &RdfStore,
    pattern: &SparqlTriplePattern,
    solution: &QuerySolution,
) -> QueryResult<Vec<QuerySolution>> {
    let subject = term_slot(&pattern.subject, solution)?;
    let predicate = predicate_slot(&pattern.predicate, solution);
    let object = term_slot(&pattern.object, solution)?;

    let lookup_subject = match &subject {
        Slot::Bound(RdfObject::NamedNode(n)) => Some(n.clone()),
        Slot::Bound(RdfObject::Literal(_)) => return Ok(Vec::new()),
        Slot::Free(_) => None,
    };
    let lookup_predicate = match &predicate {
        Slot::Bound(RdfObject::NamedNode(n)) => Some(n.clone().into()),
        Slot::Bound(RdfObject::Literal(_)) => return Ok(Vec::new()),
        Slot::Free(_) => None,
    };
    let lookup_object = match &object {
        Slot::Bound(o) => Some(o.clone()),
        Slot::Free(_) => None,
    };

    let lookup = TriplePattern::new(lookup_subject, lookup_predicate, lookup_object);
    Ok(store
        .query(&lookup)
        .into_iter()
        .filter_map(|triple| {
            let mut next = solution.clone();
            let bound = next.try_bind(&subject, triple.subject.into())
                && next.try_bind(&predicate, NamedNode::from(triple.predicate).into())
                && next.try_bind(&object, triple.object);
            bound.then_some(next)
        })
        .collect())
}

fn term_slot(term: &TermPattern, solution: &QuerySolution) -> QueryResult<Slot> {
    let name = match term {
        TermPattern::NamedNode(n) => {
            return Ok(Slot::Bound(NamedNode::from(n.clone()).into()));
        }
        TermPattern::Literal(l) => {
            return Ok(Slot::Bound(RdfObject::Literal(l.clone().into())));
        }
        TermPattern::Variable(v) => v.as_str().to_string(),
        // blank nodes in a query act as variables scoped to the pattern
        TermPattern::BlankNode(b) => format!("_:{}", b.as_str()),
        #[allow(unreachable_patterns)]
        other => return Err(QueryError::Unsupported(other.to_string())),
    };
    Ok(match solution.get(&name) {
        Some(term) => Slot::Bound(term.clone()),
        None => Slot::Free(name),
    })
}

fn predicate_slot(predicate: &NamedNodePattern, solution: &QuerySolution) -> Slot {
    match predicate {
        NamedNodePattern::NamedNode(n) => Slot::Bound(NamedNode::from(n.clone()).into()),
        NamedNodePattern::Variable(v) => match solution.get(v.as_str()) {
            Some(term) => Slot::Bound(term.clone()),
            None => Slot::Free(v.as_str().to_string()),
        },
    }
}

fn project(solution: QuerySolution, names: &[&str]) -> QuerySolution {
    let mut projected = QuerySolution::new();
    for name in names {
        if let Some(term) = solution.get(name) {
            projected.bind(*name, term.clone());
        }
    }
    projected
}

fn distinct(solutions: Vec<QuerySolution>) -> Vec<QuerySolution> {
    let mut unique: Vec<QuerySolution> = Vec::with_capacity(solutions.len());
    for solution in solutions {
        if !unique.contains(&solution) {
            unique.push(solution);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = r#"
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        @prefix vivo: <http://vivoweb.org/ontology/core#> .
        @prefix ufv: <http://vivo.ufl.edu/ontology/vivo-ufl/> .
        @prefix ind: <http://vivo.ufl.edu/individual/> .

        ind:p1 ufv:ufid "12345678" ; vivo:relatedBy ind:pos1, ind:pos2, ind:aw1 .
        ind:p2 ufv:ufid "87654321" .
        ind:pos1 rdf:type vivo:Position .
        ind:pos2 rdf:type vivo:Position, vivo:FacultyPosition .
        ind:aw1 rdf:type vivo:AwardReceipt .
    "#;

    fn store() -> RdfStore {
        RdfStore::from_turtle(DATA).unwrap()
    }

    #[test]
    fn test_select_with_join_on_shared_variable() {
        let query = r#"
            PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
            PREFIX vivo: <http://vivoweb.org/ontology/core#>
            SELECT DISTINCT ?position_uri WHERE {
                <http://vivo.ufl.edu/individual/p1> vivo:relatedBy ?position_uri .
                ?position_uri rdf:type vivo:Position .
            }"#;
        let solutions = store().execute_select(query).unwrap();
        let uris: Vec<&str> = solutions
            .iter()
            .map(|s| s.get("position_uri").unwrap().value())
            .collect();
        assert_eq!(
            uris,
            vec![
                "http://vivo.ufl.edu/individual/pos1",
                "http://vivo.ufl.edu/individual/pos2"
            ]
        );
    }

    #[test]
    fn test_select_two_variables() {
        let query = "SELECT ?x ?ufid WHERE {
            ?x <http://vivo.ufl.edu/ontology/vivo-ufl/ufid> ?ufid .
        }";
        let solutions = store().execute_select(query).unwrap();
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[1].get("ufid").unwrap().value(), "87654321");
        assert_eq!(
            solutions[1].get("x").unwrap().value(),
            "http://vivo.ufl.edu/individual/p2"
        );
    }

    #[test]
    fn test_projection_drops_other_variables() {
        let query = "SELECT ?x WHERE { ?x <http://vivo.ufl.edu/ontology/vivo-ufl/ufid> ?ufid . }";
        let solutions = store().execute_select(query).unwrap();
        assert!(solutions.iter().all(|s| s.get("ufid").is_none()));
    }

    #[test]
    fn test_limit() {
        let query = "SELECT ?s WHERE { ?s ?p ?o } LIMIT 3";
        assert_eq!(store().execute_select(query).unwrap().len(), 3);
    }

    #[test]
    fn test_literal_object_filter() {
        let query = r#"SELECT ?x WHERE {
            ?x <http://vivo.ufl.edu/ontology/vivo-ufl/ufid> "87654321"
        }"#;
        let solutions = store().execute_select(query).unwrap();
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            store().execute_select("SELECT WHERE {"),
            Err(QueryError::Syntax(_))
        ));
    }

    #[test]
    fn test_unsupported_query_form() {
        assert!(matches!(
            store().execute_select("ASK { ?s ?p ?o }"),
            Err(QueryError::Unsupported(_))
        ));
    }

    #[test]
    fn test_runner_degrades_errors_to_empty() {
        let store = store();
        let runner: &dyn QueryRunner = &store;
        assert!(runner.select("not sparql").is_empty());
    }
}
