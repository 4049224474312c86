use ringlog::Priority;
use ringlog::level::LABEL_WIDTH;

#[test]
fn numeric_order_is_inverse_severity() {
    let all = Priority::all();
    for (i, priority) in all.iter().enumerate() {
        assert_eq!(*priority as usize, i);
        assert_eq!(Priority::from_index(u8::try_from(i).unwrap()), Some(*priority));
    }
    assert_eq!(Priority::from_index(8), None);
}

#[test]
fn threshold_admits_more_severe_only() {
    assert!(Priority::Emergency.admitted_by(Priority::Warning));
    assert!(Priority::Warning.admitted_by(Priority::Warning));
    assert!(!Priority::Notice.admitted_by(Priority::Warning));
    assert!(Priority::Debug.admitted_by(Priority::Debug));
    assert!(!Priority::Alert.admitted_by(Priority::Emergency));
}

#[test]
fn labels_share_one_width() {
    for priority in Priority::all() {
        assert_eq!(priority.label().len(), LABEL_WIDTH);
        assert!(priority.label().starts_with('['));
    }
    assert_eq!(Priority::Critical.label(), "[CRITIC] ");
    assert_eq!(Priority::Emergency.label(), "[EMERG]  ");
}

#[test]
fn names_and_aliases_parse() {
    assert_eq!("warning".parse::<Priority>().unwrap(), Priority::Warning);
    assert_eq!("WARN".parse::<Priority>().unwrap(), Priority::Warning);
    assert_eq!("crit".parse::<Priority>().unwrap(), Priority::Critical);
    assert_eq!("emerg".parse::<Priority>().unwrap(), Priority::Emergency);
    assert!("trace".parse::<Priority>().is_err());
}

#[test]
fn display_round_trips_through_from_str() {
    for priority in Priority::all() {
        assert_eq!(priority.to_string().parse::<Priority>().unwrap(), priority);
    }
}

#[test]
fn default_is_info() {
    assert_eq!(Priority::default(), Priority::Info);
}
