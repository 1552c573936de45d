/// First `count` primes, smallest first. Halton uses one base per
/// dimension, so `count` is never more than the point dimension.
pub fn first_primes(count: usize) -> Vec<u64> {
    let mut primes: Vec<u64> = Vec::with_capacity(count);
    let mut candidate: u64 = 2;
    while primes.len() < count {
        let is_prime = primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0);
        if is_prime {
            primes.push(candidate);
        }
        candidate += 1;
    }
    return primes;
}
