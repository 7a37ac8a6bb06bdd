use crate::decoration::{Decoration, Side};

// Enumerates the decoration sets that make up a full tile set: the bare
// base tile first, then every valid subset of the eight markers by
// increasing size, subsets of equal size in lexicographic order over
// Decoration::ALL. Subsets, not permutations: each set appears once, with
// its members in canonical order.
pub fn enumerate() -> Vec<Vec<Decoration>> {
    let mut combos = vec![Vec::new()];
    for k in 1..=Decoration::ALL.len() {
        let mut current = Vec::with_capacity(k);
        push_combinations(0, k, &mut current, &mut combos);
    }
    combos
}

fn push_combinations(
    start: usize,
    remaining: usize,
    current: &mut Vec<Decoration>,
    out: &mut Vec<Vec<Decoration>>,
) {
    if remaining == 0 {
        if is_valid(current) {
            out.push(current.clone());
        }
        return;
    }
    for i in start..=Decoration::ALL.len() - remaining {
        current.push(Decoration::ALL[i]);
        push_combinations(i + 1, remaining - 1, current, out);
        current.pop();
    }
}

// A corner sitting next to a full side border would repaint pixels the
// border already owns, so such sets are dropped from the enumeration.
pub fn is_valid(combo: &[Decoration]) -> bool {
    let has_side = |side: Side| combo.contains(&Decoration::Side(side));
    combo.iter().all(|decoration| match decoration {
        Decoration::Side(_) => true,
        Decoration::Corner(corner) => !corner.adjacent_sides().into_iter().any(&has_side),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::Corner;

    #[test]
    fn planner_starts_with_base() {
        let combos = enumerate();
        assert_eq!(combos[0], Vec::new());
        assert_eq!(combos.iter().filter(|c| c.is_empty()).count(), 1);
    }

    #[test]
    fn planner_counts_valid_sets() {
        // 1 base, 15 side-only sets, 31 sets with at least one corner.
        assert_eq!(enumerate().len(), 47);
    }

    #[test]
    fn planner_sizes_are_monotone() {
        let combos = enumerate();
        let sizes: Vec<usize> = combos.iter().map(|c| c.len()).collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn planner_keeps_detached_corners() {
        let combos = enumerate();
        assert!(combos.contains(&vec![Decoration::Side(Side::Left)]));
        assert!(combos.contains(&vec![
            Decoration::Side(Side::Top),
            Decoration::Corner(Corner::BottomRight),
        ]));
    }

    #[test]
    fn planner_drops_corner_beside_border() {
        let combos = enumerate();
        assert!(!combos.contains(&vec![
            Decoration::Side(Side::Top),
            Decoration::Corner(Corner::TopLeft),
        ]));
        assert!(!combos.contains(&vec![
            Decoration::Side(Side::Left),
            Decoration::Corner(Corner::BottomLeft),
        ]));
        assert!(combos.iter().all(|c| is_valid(c)));
    }

    #[test]
    fn validity_rules() {
        assert!(is_valid(&[]));
        assert!(is_valid(&[Decoration::Corner(Corner::TopLeft)]));
        assert!(is_valid(&[
            Decoration::Side(Side::Bottom),
            Decoration::Corner(Corner::TopRight),
        ]));
        assert!(!is_valid(&[
            Decoration::Side(Side::Right),
            Decoration::Corner(Corner::TopRight),
        ]));
    }
}
