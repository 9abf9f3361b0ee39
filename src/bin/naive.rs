use strmatch::search_algorithms::SearchAlgorithm;

fn main() -> strmatch::Result<()> {
    strmatch::demo::run(SearchAlgorithm::Naive)
}
