use pagelist::{PageRequest, PageStatus};

/// Answers page requests synchronously. Simulations and tests use it in place of a network.
pub trait PageSource<T> {
    fn fetch(&mut self, request: PageRequest) -> (Vec<T>, PageStatus);
}

/// Serves fixed-size pages out of a `Vec`, with optional injected failures.
#[derive(Clone, Debug)]
pub struct VecSource<T> {
    items: Vec<T>,
    failures: usize,
    served: usize,
}

impl<T: Clone> VecSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            failures: 0,
            served: 0,
        }
    }

    /// Makes the next `n` fetches fail.
    pub fn fail_next(&mut self, n: usize) {
        self.failures = n;
    }

    /// Number of fetches answered so far, failures included.
    pub fn served(&self) -> usize {
        self.served
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> PageSource<T> for VecSource<T> {
    fn fetch(&mut self, request: PageRequest) -> (Vec<T>, PageStatus) {
        self.served += 1;
        if self.failures > 0 {
            self.failures -= 1;
            return (Vec::new(), PageStatus::Failed);
        }

        let start = request
            .page
            .saturating_sub(1)
            .saturating_mul(request.page_size)
            .min(self.items.len());
        let end = start
            .saturating_add(request.page_size)
            .min(self.items.len());
        let status = if end >= self.items.len() {
            PageStatus::Exhausted
        } else {
            PageStatus::More
        };
        (self.items[start..end].to_vec(), status)
    }
}

impl<T, F: FnMut(PageRequest) -> (Vec<T>, PageStatus)> PageSource<T> for F {
    fn fetch(&mut self, request: PageRequest) -> (Vec<T>, PageStatus) {
        self(request)
    }
}
