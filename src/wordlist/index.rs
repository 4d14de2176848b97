/// A set of lowercase words answering membership and prefix queries.
pub trait Index {
    fn add(&mut self, word: &str) -> bool;
    fn remove(&mut self, word: &str) -> bool;
    fn contains(&self, word: &str) -> bool;
    fn contains_prefix(&self, prefix: &str) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds every item, returning how many were new.
    fn add_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item = &'a str>, Self: Sized {
        items.into_iter().filter(|x| self.add(x)).count()
    }
}
