use proptest::prelude::*;

use crate::candidate::{Candidate, CandidateError, ParenPlacement, SeenSet, Span};
use crate::expression::Operator;
use crate::utils::Tolerance;

use Operator::{Add, Divide, Multiply, Subtract};

fn span(open: usize, close: usize) -> Span {
    match Span::new(open, close) {
        Ok(span) => span,
        Err(e) => panic!("bad test span: {}", e),
    }
}

fn render(numbers: &[i64], operators: &[Operator], parens: ParenPlacement) -> String {
    match Candidate::new(numbers, operators, parens) {
        Ok(candidate) => candidate.canonical().to_string(),
        Err(e) => panic!("bad test candidate: {}", e),
    }
}

#[test]
fn test_render_without_parens() {
    let out = render(&[2, 3, 4], &[Add, Multiply], ParenPlacement::none());
    assert_eq!(out, "2+3*4");
}

#[test]
fn test_render_single_span() {
    let numbers = [10, 10, 4, 4];
    let ops = [Multiply, Subtract, Divide];
    let out = render(&numbers, &ops, ParenPlacement::single(span(0, 2)));
    assert_eq!(out, "(10*10-4)/4");

    let out = render(&numbers, &ops, ParenPlacement::single(span(1, 3)));
    assert_eq!(out, "10*(10-4/4)");
}

#[test]
fn test_render_double_span() {
    let parens = ParenPlacement::double(span(0, 1), span(2, 3));
    assert!(parens.is_ok());
    if let Ok(parens) = parens {
        let out = render(&[1, 2, 3, 4], &[Add, Multiply, Add], parens);
        assert_eq!(out, "(1+2)*(3+4)");
    }
}

#[test]
fn test_render_negative_numbers() {
    let out = render(&[4, -3], &[Subtract], ParenPlacement::none());
    assert_eq!(out, "4--3");
}

#[test]
fn test_canonical_is_cached_and_stable() {
    let numbers = [1, 3, 4, 6];
    let ops = [Add, Add, Multiply];
    let parens = ParenPlacement::single(span(1, 2));
    let candidate = Candidate::new(&numbers, &ops, parens);
    assert!(candidate.is_ok());
    if let Ok(candidate) = candidate {
        let first = candidate.canonical();
        let second = candidate.canonical();
        assert_eq!(first, "1+(3+4)*6");
        assert!(std::ptr::eq(first, second));
        assert_eq!(candidate.to_string(), first);

        let again = render(&numbers, &ops, parens);
        assert_eq!(again, first);
    }
}

#[test]
fn test_candidate_evaluates_rendering() {
    let numbers = [10, 10, 4, 4];
    let ops = [Multiply, Subtract, Divide];
    let candidate = Candidate::new(&numbers, &ops, ParenPlacement::single(span(0, 2)));
    assert!(candidate.is_ok());
    if let Ok(candidate) = candidate {
        let result = candidate.evaluate(Tolerance::default());
        assert!(result.is_ok());
        if let Ok(result) = result {
            assert_eq!(result.float, 24.0);
            assert_eq!(result.total, Some(24));
        }
    }
}

#[test]
fn test_candidate_rejects_mismatched_lengths() {
    let result = Candidate::new(&[1, 2, 3], &[Add], ParenPlacement::none());
    assert!(matches!(
        result,
        Err(CandidateError::OperatorCount {
            numbers: 3,
            expected: 2,
            actual: 1
        })
    ));

    let result = Candidate::new(&[], &[], ParenPlacement::none());
    assert!(result.is_err());
}

#[test]
fn test_candidate_rejects_span_past_end() {
    let result = Candidate::new(&[1, 2], &[Add], ParenPlacement::single(span(0, 2)));
    assert!(matches!(
        result,
        Err(CandidateError::SpanOutOfRange { close: 2, len: 2 })
    ));
}

#[test]
fn test_span_validation() {
    assert_eq!(
        Span::new(2, 2),
        Err(CandidateError::InvalidSpan { open: 2, close: 2 })
    );
    assert!(Span::new(3, 1).is_err());
    assert!(Span::new(0, 1).is_ok());
}

#[test]
fn test_double_span_must_not_overlap() {
    assert!(ParenPlacement::double(span(0, 2), span(2, 3)).is_err());
    assert!(ParenPlacement::double(span(1, 3), span(0, 1)).is_err());
    assert!(ParenPlacement::double(span(0, 1), span(2, 4)).is_ok());
}

#[test]
fn test_enumerate_two_numbers() {
    let placements = ParenPlacement::enumerate(2);
    assert_eq!(placements, vec![ParenPlacement::single(span(0, 1))]);
}

#[test]
fn test_enumerate_three_numbers_has_no_double_span() {
    let placements = ParenPlacement::enumerate(3);
    assert_eq!(placements.len(), 3);
    assert!(placements.iter().all(|p| p.spans().count() == 1));
}

#[test]
fn test_enumerate_four_numbers() {
    let placements = ParenPlacement::enumerate(4);
    assert_eq!(placements.len(), 7);

    let double = ParenPlacement::double(span(0, 1), span(2, 3));
    assert!(double.is_ok());
    if let Ok(double) = double {
        assert_eq!(placements.get(1), Some(&double));
    }
    assert_eq!(placements.first(), Some(&ParenPlacement::single(span(0, 1))));
    assert_eq!(placements.last(), Some(&ParenPlacement::single(span(2, 3))));
}

#[test]
fn test_enumerate_five_numbers_tail_span_reaches_end() {
    let placements = ParenPlacement::enumerate(5);
    assert_eq!(placements.len(), 11);
    let doubles: Vec<_> = placements
        .iter()
        .filter(|p| p.spans().count() == 2)
        .collect();
    assert_eq!(doubles.len(), 1);
    if let Some(double) = doubles.first() {
        let spans: Vec<_> = double.spans().map(|s| (s.open(), s.close())).collect();
        assert_eq!(spans, vec![(0, 1), (2, 4)]);
    }
}

#[test]
fn test_seen_set_check_and_mark() {
    let mut seen = SeenSet::new();
    assert!(seen.is_empty());
    assert!(!seen.check_and_mark("1+2"));
    assert!(seen.check_and_mark("1+2"));
    assert!(seen.check_and_mark("1+2"));
    assert!(!seen.check_and_mark("2+1"));
    assert!(seen.contains("2+1"));
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_candidate_marks_through_seen_set() {
    let mut seen = SeenSet::new();
    let ops = [Add];
    let a = Candidate::new(&[3, 3], &ops, ParenPlacement::single(span(0, 1)));
    let b = Candidate::new(&[3, 3], &ops, ParenPlacement::single(span(0, 1)));
    assert!(a.is_ok() && b.is_ok());
    if let (Ok(a), Ok(b)) = (a, b) {
        assert!(!a.check_and_mark(&mut seen));
        assert!(b.check_and_mark(&mut seen));
        assert!(seen.contains("(3+3)"));
    }
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![Just(Add), Just(Subtract), Just(Multiply), Just(Divide)]
}

proptest! {
    #[test]
    fn canonical_rendering_is_deterministic(
        numbers in prop::collection::vec(-50i64..50, 2..7),
        seed in any::<usize>(),
        ops in prop::collection::vec(operator_strategy(), 6),
    ) {
        let ops = &ops[..numbers.len() - 1];
        let placements = ParenPlacement::enumerate(numbers.len());
        let parens = placements[seed % placements.len()];

        let first = Candidate::new(&numbers, ops, parens);
        let second = Candidate::new(&numbers, ops, parens);
        prop_assert!(first.is_ok() && second.is_ok());
        if let (Ok(first), Ok(second)) = (first, second) {
            prop_assert_eq!(first.canonical(), second.canonical());
            let opens = first.canonical().matches('(').count();
            let closes = first.canonical().matches(')').count();
            prop_assert_eq!(opens, closes);
            prop_assert_eq!(opens, parens.spans().count());
        }
    }

    #[test]
    fn enumerate_counts_every_pair(len in 2usize..9) {
        let placements = ParenPlacement::enumerate(len);
        let extra = usize::from(len >= 4);
        prop_assert_eq!(placements.len(), len * (len - 1) / 2 + extra);
    }
}
