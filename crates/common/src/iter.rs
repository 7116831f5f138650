//! A peekable iterator with unbounded lookahead, modelled after `itertools::MultiPeek`.
use std::{collections::VecDeque, iter::Fuse};

pub struct MultiPeekable<I>
where
    I: Iterator,
{
    iter: Fuse<I>,
    buf: VecDeque<I::Item>,
}

pub trait MultiPeek: Iterator + Sized {
    fn multi_peekable(self) -> MultiPeekable<Self>;
}

impl<I: Iterator> MultiPeek for I {
    fn multi_peekable(self) -> MultiPeekable<I> {
        MultiPeekable {
            iter: self.fuse(),
            buf: VecDeque::new(),
        }
    }
}

impl<I: Iterator> MultiPeekable<I> {
    pub fn peek(&mut self) -> Option<&I::Item> {
        self.peek_nth(0)
    }

    /// Looks `n` items ahead without consuming anything, `n` starts from 0.
    pub fn peek_nth(&mut self, n: usize) -> Option<&I::Item> {
        let missing = (n + 1).saturating_sub(self.buf.len());

        self.buf.extend(self.iter.by_ref().take(missing));

        self.buf.get(n)
    }

    pub fn next_if(&mut self, func: impl FnOnce(&I::Item) -> bool) -> Option<I::Item> {
        match self.next()? {
            matched if func(&matched) => Some(matched),
            other => {
                self.buf.push_front(other);
                None
            }
        }
    }

    /// Consumes `n` items only if every one of them satisfies `func`, returning the last one.
    pub fn advance_n_if_each(
        &mut self,
        n: usize,
        func: impl Fn((usize, &I::Item)) -> bool,
    ) -> Option<I::Item> {
        if n == 0 || self.peek_nth(n - 1).is_none() {
            return None;
        }

        if !self.buf.iter().take(n).enumerate().all(func) {
            return None;
        }

        let mut taken = self.buf.drain(..n);
        taken.next_back()
    }

    /// Consumes items while `func` holds and returns how many were consumed.
    pub fn advance_while(&mut self, func: impl Fn(&I::Item) -> bool) -> usize {
        let mut count = 0;
        while self.next_if(&func).is_some() {
            count += 1;
        }
        count
    }
}

impl<I> Iterator for MultiPeekable<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.pop_front().or_else(|| self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (low, high) = self.iter.size_hint();
        (
            low.saturating_add(self.buf.len()),
            high.and_then(|high| high.checked_add(self.buf.len())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_consume() {
        let mut iter = "abc".chars().multi_peekable();

        assert_eq!(iter.peek(), Some(&'a'));
        assert_eq!(iter.peek(), Some(&'a'));
        assert_eq!(iter.next(), Some('a'));
        assert_eq!(iter.peek_nth(1), Some(&'c'));
        assert_eq!(iter.peek_nth(2), None);
        assert_eq!(iter.collect::<String>(), "bc");
    }

    #[test]
    fn next_if_keeps_order() {
        let mut iter = (0..4).multi_peekable();

        // fill the lookahead buffer first, a rejected item must stay in front
        assert_eq!(iter.peek_nth(2), Some(&2));
        assert_eq!(iter.next_if(|&x| x == 5), None);
        assert_eq!(iter.next_if(|&x| x == 0), Some(0));
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn advance_n_if_each() {
        let mut iter = [3, 4, 5, 6].into_iter().multi_peekable();

        assert_eq!(iter.advance_n_if_each(2, |(i, &x)| x == i + 9), None);
        assert_eq!(iter.advance_n_if_each(2, |(i, &x)| x == i + 3), Some(4));
        assert_eq!(iter.advance_n_if_each(3, |_| true), None);
        assert_eq!(iter.next(), Some(5));
    }

    #[test]
    fn advance_while() {
        let mut iter = [1, 1, 2, 1].into_iter().multi_peekable();

        assert_eq!(iter.advance_while(|&x| x == 1), 2);
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.advance_while(|&x| x == 7), 0);
    }
}
