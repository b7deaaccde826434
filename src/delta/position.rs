//! Position reconciliation

use super::{Delta, DeltaGenerator, FieldAction, FieldSpec};
use crate::model::{whole_seconds, Position, SourcePosition};
use crate::rdf::vocab;
use tracing::debug;

const POSITION_FIELDS: [FieldSpec<Position, SourcePosition>; 6] = [
    FieldSpec {
        name: "label",
        predicate: vocab::RDFS_LABEL,
        graph: FieldAction::Literal(|g| g.label.as_ref()),
        source: |s| s.label.clone(),
    },
    FieldSpec {
        name: "rank",
        predicate: vocab::VIVO_RANK,
        graph: FieldAction::Literal(|g| g.rank.as_ref()),
        source: |s| s.rank.clone(),
    },
    FieldSpec {
        name: "hr_title",
        predicate: vocab::UFV_HR_JOB_TITLE,
        graph: FieldAction::Literal(|g| g.hr_title.as_ref()),
        source: |s| s.hr_title.clone(),
    },
    FieldSpec {
        name: "position_type",
        predicate: vocab::RDF_TYPE,
        graph: FieldAction::Class(|g| g.position_type.map(|t| t.tag())),
        source: |s| Some(s.position_type.tag().to_string()),
    },
    FieldSpec {
        name: "org_uri",
        predicate: vocab::VIVO_RELATES,
        graph: FieldAction::Resource(|g| g.org_uri.as_deref()),
        source: |s| Some(s.org_uri.clone()),
    },
    FieldSpec {
        name: "person_uri",
        predicate: vocab::VIVO_RELATES,
        graph: FieldAction::Resource(|g| g.person_uri.as_deref()),
        source: |s| Some(s.person_uri.clone()),
    },
];

impl<'a> DeltaGenerator<'a> {
    /// Reconcile an existing position with the source position it matched.
    ///
    /// Intervals are never edited: when either date differs a new interval
    /// is materialized and the position repointed to it. The superseded
    /// interval stays in the graph.
    pub fn update_position(&self, graph: &Position, source: &SourcePosition) -> Delta {
        let mut delta = self.update_entity(&graph.uri, graph, source, &POSITION_FIELDS);

        let graph_dates = (graph.start_date(), graph.end_date());
        let source_dates = (
            source.start_date.map(whole_seconds),
            source.end_date.map(whole_seconds),
        );
        if graph_dates != source_dates {
            debug!(
                "Interval of {} changes: {:?} -> {:?}",
                graph.uri, graph_dates, source_dates
            );
            let dti = delta.absorb(self.materializer.add_dti(source.start_date, source.end_date));
            delta.extend(self.update_resource(
                &graph.uri,
                vocab::VIVO_DATE_TIME_INTERVAL,
                graph.dti_uri(),
                Some(dti.as_str()),
            ));
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{PredicateCatalog, SequenceMinter};
    use crate::delta::tests::{node, text, NS};
    use crate::materialize::EntityMaterializer;
    use crate::model::{DatetimeInterval, PositionType};
    use crate::rdf::{Literal, PrefixCatalog, Triple};
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap()
    }

    fn graph_position() -> Position {
        let mut interval = DatetimeInterval::new(node("dti1"));
        interval.start_uri = Some(format!("{}dtv1", NS));
        interval.start = Some(date(2013, 1, 1));
        Position {
            label: text("Warden of the Northern Marshes"),
            hr_title: None,
            rank: text("1"),
            position_type: Some(PositionType::Faculty),
            org_uri: Some(format!("{}org1", NS)),
            person_uri: Some(format!("{}n3715", NS)),
            interval: Some(interval),
            ..Position::new(node("pos1"))
        }
    }

    fn source_position() -> SourcePosition {
        SourcePosition {
            label: Some("Warden of the Northern Marshes".to_string()),
            position_type: PositionType::Faculty,
            org_uri: format!("{}org1", NS),
            person_uri: format!("{}n3715", NS),
            rank: Some("1".to_string()),
            hr_title: None,
            start_date: Some(date(2013, 1, 1)),
            end_date: None,
        }
    }

    #[test]
    fn test_identical_position_is_empty() {
        let minter = SequenceMinter::new(NS, 1);
        let catalog = PrefixCatalog::new();
        let generator = DeltaGenerator::new(EntityMaterializer::new(&minter, &catalog), &catalog);

        let delta = generator.update_position(&graph_position(), &source_position());
        assert!(delta.is_empty(), "{:?}", delta);
        assert_eq!(minter.peek(), 1);
    }

    #[test]
    fn test_rank_and_end_date_change() {
        let minter = SequenceMinter::new(NS, 100);
        let catalog = PrefixCatalog::new();
        let generator = DeltaGenerator::new(EntityMaterializer::new(&minter, &catalog), &catalog);
        let materializer = generator.materializer();

        let source = SourcePosition {
            rank: Some("2".to_string()),
            end_date: Some(date(2014, 3, 23)),
            ..source_position()
        };
        let delta = generator.update_position(&graph_position(), &source);

        // n100 interval, n101 start value, n102 end value
        assert!(delta.add.contains(&materializer.literal_triple(
            &node("pos1"),
            vocab::VIVO_RANK,
            "2"
        )));
        assert!(delta.add.contains(&materializer.type_triple(
            &node("n100"),
            vocab::VIVO_DATE_TIME_INTERVAL_CLASS
        )));
        assert!(delta.add.contains(&materializer.resource_triple(
            &node("n100"),
            vocab::VIVO_END,
            &node("n102")
        )));
        assert!(delta.add.contains(&Triple::new(
            node("n102"),
            catalog.resolve(vocab::VIVO_DATE_TIME),
            Literal::new_date_time("2014-03-23T00:00:00").into(),
        )));
        assert!(delta.add.contains(&materializer.resource_triple(
            &node("pos1"),
            vocab::VIVO_DATE_TIME_INTERVAL,
            &node("n100")
        )));

        assert_eq!(
            delta.sub,
            vec![
                materializer.literal_triple(&node("pos1"), vocab::VIVO_RANK, "1"),
                materializer.resource_triple(
                    &node("pos1"),
                    vocab::VIVO_DATE_TIME_INTERVAL,
                    &node("dti1")
                ),
            ]
        );
    }

    #[test]
    fn test_fractional_seconds_keep_interval() {
        let minter = SequenceMinter::new(NS, 1);
        let catalog = PrefixCatalog::new();
        let generator = DeltaGenerator::new(EntityMaterializer::new(&minter, &catalog), &catalog);

        let start = NaiveDate::from_ymd_opt(2013, 1, 1)
            .and_then(|d| d.and_hms_milli_opt(0, 0, 0, 250))
            .unwrap();
        let source = SourcePosition {
            start_date: Some(start),
            ..source_position()
        };
        assert!(generator.update_position(&graph_position(), &source).is_empty());
        assert_eq!(minter.peek(), 1);
    }

    #[test]
    fn test_interval_added_when_graph_has_none() {
        let minter = SequenceMinter::new(NS, 1);
        let catalog = PrefixCatalog::new();
        let generator = DeltaGenerator::new(EntityMaterializer::new(&minter, &catalog), &catalog);

        let graph = Position {
            interval: None,
            ..graph_position()
        };
        let delta = generator.update_position(&graph, &source_position());
        assert!(delta.sub.is_empty());
        assert!(delta.add.contains(&generator.materializer().resource_triple(
            &node("pos1"),
            vocab::VIVO_DATE_TIME_INTERVAL,
            &node("n1")
        )));
    }

    #[test]
    fn test_label_and_hr_title_change() {
        let minter = SequenceMinter::new(NS, 1);
        let catalog = PrefixCatalog::new();
        let generator = DeltaGenerator::new(EntityMaterializer::new(&minter, &catalog), &catalog);
        let materializer = generator.materializer();

        let source = SourcePosition {
            label: Some("Professor".to_string()),
            hr_title: Some("PROF".to_string()),
            ..source_position()
        };
        let delta = generator.update_position(&graph_position(), &source);
        assert_eq!(
            delta.add,
            vec![
                materializer.literal_triple(&node("pos1"), vocab::RDFS_LABEL, "Professor"),
                materializer.literal_triple(&node("pos1"), vocab::UFV_HR_JOB_TITLE, "PROF"),
            ]
        );
        assert_eq!(
            delta.sub,
            vec![materializer.literal_triple(
                &node("pos1"),
                vocab::RDFS_LABEL,
                "Warden of the Northern Marshes"
            )]
        );
    }
}
