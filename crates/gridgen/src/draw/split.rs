//! Equal-size partitioning of a randomized roster into races.

/// Splits `items` into races that fit `available_grids`.
///
/// Race sizes differ by at most one: with `n = ceil(len / available_grids)`
/// races, the first `len % n` races take one extra item. Items are taken in
/// order, so callers randomize before splitting. Returns no races when there
/// are no items or no available grids.
pub fn split_into_races<T: Clone>(items: &[T], available_grids: usize) -> Vec<Vec<T>> {
    if available_grids == 0 || items.is_empty() {
        return Vec::new();
    }

    if available_grids >= items.len() {
        return vec![items.to_vec()];
    }

    let number_of_races = items.len().div_ceil(available_grids);
    let base_size = items.len() / number_of_races;
    let remainder = items.len() % number_of_races;

    let mut races = Vec::with_capacity(number_of_races);
    let mut rest = items;

    for race_index in 0..number_of_races {
        let size = base_size + usize::from(race_index < remainder);
        let (race, tail) = rest.split_at(size);
        races.push(race.to_vec());
        rest = tail;
    }

    races
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(races: &[Vec<u32>]) -> Vec<usize> {
        races.iter().map(Vec::len).collect()
    }

    #[test]
    fn test_no_grids_no_races() {
        assert!(split_into_races(&[1u32, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_no_items_no_races() {
        assert!(split_into_races::<u32>(&[], 8).is_empty());
    }

    #[test]
    fn test_fits_in_one_race() {
        let items = [1u32, 2, 3, 4, 5];
        assert_eq!(split_into_races(&items, 6), vec![items.to_vec()]);
        assert_eq!(split_into_races(&items, 5), vec![items.to_vec()]);
    }

    #[test]
    fn test_even_split() {
        let items: Vec<u32> = (1..=8).collect();
        let races = split_into_races(&items, 7);
        assert_eq!(races, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]]);
    }

    #[test]
    fn test_remainder_goes_to_first_races() {
        let items: Vec<u32> = (1..=11).collect();
        let races = split_into_races(&items, 4);
        // ceil(11 / 4) = 3 races, base 3, remainder 2
        assert_eq!(sizes(&races), vec![4, 4, 3]);
        assert_eq!(races.concat(), items);
    }

    #[test]
    fn test_many_small_races() {
        let items: Vec<u32> = (1..=25).collect();
        let races = split_into_races(&items, 2);
        assert_eq!(races.len(), 13);
        assert_eq!(&sizes(&races)[..12], &[2; 12]);
        assert_eq!(races[12].len(), 1);
    }
}
