extern crate transdep;

mod test_utils;

mod tests {
    use std::io::Cursor;

    use transdep::features::{AddressedValueGenerator, FeatureNode};
    use transdep::io::serialize::{self, Format};
    use transdep::preprocessing::{Numberer, TransitionNumberer};
    use transdep::syntax::transition::prelude::*;
    use transdep::syntax::transition::{self, ArcStandard, Dependency, DependencySet};
    use transdep::training::{self, AttachmentScore, Instance, InstanceCollector};

    use super::test_utils::mock;

    const MAX_FEATURES: usize = 1 << 18;

    fn collector() -> InstanceCollector<AddressedValueGenerator> {
        let generator = AddressedValueGenerator::parse(
            "[STACK0]TAG [STACK0]TOKEN [BUFFER0]TAG [BUFFER0]TOKEN [STACK0,LDEP0]DEPREL",
        ).unwrap();
        InstanceCollector::new(generator, MAX_FEATURES)
    }

    #[test]
    fn test_numberer() {
        let mut numberer = Numberer::new();
        assert!(numberer.is_empty());
        assert_eq!(numberer.add("a"), 0);
        assert_eq!(numberer.add("b"), 1);
        assert_eq!(numberer.add("a"), 0);
        assert_eq!(numberer.len(), 2);
        assert_eq!(numberer.number(&"b"), Some(1));
        assert_eq!(numberer.number(&"c"), None);
        assert_eq!(numberer.value(1), Some(&"b"));
        assert_eq!(numberer.value(2), None);
        assert_eq!(numberer.values(), &["a", "b"]);
    }

    #[test]
    fn test_numberer_json() {
        let mut numberer = TransitionNumberer::new();
        numberer.add(Transition::Shift);
        numberer.add(Transition::LeftArc("nsubj".to_string()));
        numberer.add(Transition::RightArc("obj".to_string()));

        let bytes = serialize::serialize(&numberer, Format::Json).unwrap();
        assert_eq!(
            String::from_utf8(bytes.clone()).unwrap(),
            r#"["SHIFT","LEFT_ARC nsubj","RIGHT_ARC obj"]"#
        );
        let restored: TransitionNumberer = serialize::deserialize(&bytes).unwrap();
        assert_eq!(restored, numberer);
        assert_eq!(restored.number(&Transition::RightArc("obj".to_string())), Some(2));

        let duplicate = serialize::deserialize::<TransitionNumberer>(br#"["SHIFT","SHIFT"]"#);
        assert!(duplicate.is_err());
        let malformed = serialize::deserialize::<TransitionNumberer>(br#"["LEFT_ARC"]"#);
        assert!(malformed.is_err());
    }

    #[test]
    fn test_collect_instances() {
        let tokens = mock::a_b_c();
        let mut collector = collector();
        let instances = collector.collect(&tokens).unwrap();
        assert_eq!(
            instances.iter().map(|i| i.label).collect::<Vec<_>>(),
            vec![0, 0, 1, 0, 2, 3, 0]
        );
        assert_eq!(
            collector.numberer().values(),
            &[
                Transition::Shift,
                Transition::LeftArc("nsubj".to_string()),
                Transition::RightArc("obj".to_string()),
                Transition::RightArc("root".to_string()),
            ]
        );
        for instance in &instances {
            assert!(!instance.features.is_empty());
            assert!(instance
                .features
                .iter()
                .all(|node| node.index >= 1 && node.index <= MAX_FEATURES));
        }

        let more = collector.collect(&mock::john_saw_mary()).unwrap();
        assert_eq!(more.len(), 2 * 4 + 1);
        let numberer = collector.into_numberer();
        assert_eq!(numberer.number(&Transition::Shift), Some(0));
        assert!(numberer.len() > 4);
    }

    #[test]
    fn test_collect_unreachable() {
        let mut collector = collector();
        match collector.collect(&mock::non_projective()) {
            Err(training::Error::Unreachable { expected, found }) => {
                assert_eq!(expected, 4);
                assert_eq!(found, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        match collector.collect(&mock::untagged(3)) {
            Err(training::Error::Transition(transition::Error::IncompleteToken(1))) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(collector.numberer().is_empty());
    }

    #[test]
    fn test_write_instance() {
        let instance = Instance {
            label: 3,
            features: vec![
                FeatureNode::new(1, 1.0),
                FeatureNode::new(5, -1.0),
                FeatureNode::new(7, 0.0),
                FeatureNode::new(9, 2.0),
            ],
        };
        let mut buf = vec![];
        training::write_instance(&mut buf, &instance).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3 1:1 5:-1 9:2\n");
    }

    #[test]
    fn test_transition_file() {
        let system = ArcStandard::new();
        let transitions = vec![
            Transition::Shift,
            Transition::LeftArc("nsubj".to_string()),
            Transition::RightArc("root".to_string()),
        ];
        let mut buf = vec![];
        training::write_transitions(&mut buf, &system, &transitions).unwrap();
        assert_eq!(
            String::from_utf8(buf.clone()).unwrap(),
            "SHIFT\nLEFT_ARC nsubj\nRIGHT_ARC root\n"
        );
        let restored = training::read_transitions(Cursor::new(buf), &system).unwrap();
        assert_eq!(restored, transitions);

        let input = "SHIFT\r\n\nSWAP\n";
        match training::read_transitions(Cursor::new(input), &system) {
            Err(training::Error::Transition(transition::Error::UnknownTransition(ref s))) => {
                assert_eq!(s, "SWAP");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_attachment_score() {
        let gold = DependencySet::from_tokens(&mock::a_b_c()).unwrap();
        let predicted = vec![
            Dependency::new(2, "nsubj", 1),
            Dependency::new(0, "root", 2),
            Dependency::new(2, "dep", 3),
        ].into_iter()
            .collect::<DependencySet>();

        let mut score = AttachmentScore::new();
        assert!(score.uas().is_err());
        score.count(&predicted, &gold);
        assert_eq!(score.uas().unwrap(), 1.0);
        assert!((score.las().unwrap() - 2.0 / 3.0).abs() < 1e-6);

        score.count(&DependencySet::new(), &gold);
        assert!((score.uas().unwrap() - 0.5).abs() < 1e-6);
        score.reset();
        assert!(score.las().is_err());
    }
}
