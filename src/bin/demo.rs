use mergesort::sort_range;

fn main() {
    let mut vals = [1, 6, 7, 2, 4, 9];

    let last = vals.len() - 1;
    sort_range(&mut vals, 0, last).expect("full range of a non-empty array is valid");

    for val in vals {
        println!("{val}");
    }
}
