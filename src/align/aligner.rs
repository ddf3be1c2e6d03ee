/*! Greedy cosine alignment

For each source sentence, in reading order, the most similar target sentence is picked among
*all* target sentences (ties going to the lowest index). The pair is kept only if that target
has not been claimed by an earlier source sentence; otherwise the source sentence stays unmatched.

The result is a partial matching that is injective on the target side and follows the source order.
It is not a globally optimal assignment: a poor early match can shadow a better later one.
!*/
use std::collections::HashSet;

use log::{info, warn};
use rayon::prelude::*;

use crate::error::Error;

use super::Embed;

/// Pairs with fewer matches than this ratio of the shorter sequence trigger a warning.
const LOW_ALIGNMENT_RATIO: f64 = 0.5;

/// Indices of two corresponding sentences in the source and target sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlignmentPair {
    pub source: usize,
    pub target: usize,
}

impl AlignmentPair {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Gets the sentences the pair points to.
    pub fn resolve<'a>(
        &self,
        source: &'a [String],
        target: &'a [String],
    ) -> Result<(&'a str, &'a str), Error> {
        match (source.get(self.source), target.get(self.target)) {
            (Some(s), Some(t)) => Ok((s, t)),
            _ => Err(Error::OutOfBoundsAlignment {
                source: self.source,
                target: self.target,
                source_len: source.len(),
                target_len: target.len(),
            }),
        }
    }
}

impl From<(usize, usize)> for AlignmentPair {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

/// Checks that the embedder returned one finite, non-empty vector per sentence,
/// all of dimension `dim` (or of the dimension of the first one if `dim` is `None`).
fn check_vectors(vectors: &[Vec<f32>], expected: usize, dim: Option<usize>) -> Result<usize, Error> {
    if vectors.len() != expected {
        return Err(Error::Embedding(format!(
            "expected {} vectors, got {}",
            expected,
            vectors.len()
        )));
    }

    let dim = match dim.or_else(|| vectors.first().map(Vec::len)) {
        Some(0) | None => return Err(Error::Embedding("empty vectors".to_string())),
        Some(d) => d,
    };

    for (idx, v) in vectors.iter().enumerate() {
        if v.len() != dim {
            return Err(Error::Embedding(format!(
                "vector {} has dimension {}, expected {}",
                idx,
                v.len(),
                dim
            )));
        }
        if v.iter().any(|x| !x.is_finite()) {
            return Err(Error::Embedding(format!(
                "vector {} has non finite values",
                idx
            )));
        }
    }

    Ok(dim)
}

/// Scales `v` to unit length. Null vectors are kept as is (similarity 0 with anything).
fn unit(v: &[f32]) -> Vec<f32> {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm == 0.0 {
        v.to_vec()
    } else {
        v.iter().map(|x| x / norm).collect()
    }
}

/// Cosine similarity between every source and target vector (`|source|` rows of `|target|` columns).
pub fn cosine_matrix(source: &[Vec<f32>], target: &[Vec<f32>]) -> Vec<Vec<f32>> {
    let target: Vec<Vec<f32>> = target.iter().map(|v| unit(v)).collect();
    source
        .par_iter()
        .map(|s| {
            let s = unit(s);
            target
                .iter()
                .map(|t| s.iter().zip(t).map(|(a, b)| a * b).sum::<f32>())
                .collect()
        })
        .collect()
}

/// Index of the first maximum of the row.
fn argmax(row: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &sim) in row.iter().enumerate() {
        match best {
            Some((_, best_sim)) if sim <= best_sim => (),
            _ => best = Some((idx, sim)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Greedy source-ordered matching over a similarity matrix.
pub fn greedy_match(similarities: &[Vec<f32>]) -> Vec<AlignmentPair> {
    let mut claimed = HashSet::new();
    similarities
        .iter()
        .enumerate()
        .filter_map(|(source, row)| {
            let target = argmax(row)?;
            if claimed.insert(target) {
                Some(AlignmentPair::new(source, target))
            } else {
                None
            }
        })
        .collect()
}

/// Aligns two sentence sequences.
///
/// Embedding errors abort the whole alignment: no pairs are returned.
pub fn align<E: Embed + ?Sized>(
    source: &[String],
    target: &[String],
    embedder: &E,
) -> Result<Vec<AlignmentPair>, Error> {
    info!(
        "aligning {} source and {} target sentences",
        source.len(),
        target.len()
    );
    if source.is_empty() || target.is_empty() {
        warn!("nothing to align");
        return Ok(Vec::new());
    }

    let source_vectors = embedder.embed(source)?;
    let dim = check_vectors(&source_vectors, source.len(), None)?;
    let target_vectors = embedder.embed(target)?;
    check_vectors(&target_vectors, target.len(), Some(dim))?;

    let similarities = cosine_matrix(&source_vectors, &target_vectors);
    let pairs = greedy_match(&similarities);

    info!("found {} sentence pairs", pairs.len());
    let shortest = source.len().min(target.len());
    if (pairs.len() as f64) < shortest as f64 * LOW_ALIGNMENT_RATIO {
        warn!(
            "only {} pairs for {} sentences in the shortest sequence, check data quality",
            pairs.len(),
            shortest
        );
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Embeds known sentences with fixed vectors.
    struct Lookup(HashMap<&'static str, Vec<f32>>);

    impl Embed for Lookup {
        fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>, Error> {
            sentences
                .iter()
                .map(|s| {
                    self.0
                        .get(s.as_str())
                        .cloned()
                        .ok_or_else(|| Error::Embedding(format!("unknown sentence {}", s)))
                })
                .collect()
        }
    }

    fn strings(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn claimed_target_leaves_source_unmatched() {
        let embedder = Lookup(
            vec![
                ("A1", vec![1.0, 0.0]),
                ("A2", vec![1.0, 0.0]),
                ("A3", vec![0.0, 1.0]),
                ("B1", vec![1.0, 0.0]),
                ("B2", vec![0.0, 1.0]),
            ]
            .into_iter()
            .collect(),
        );
        let pairs = align(
            &strings(&["A1", "A2", "A3"]),
            &strings(&["B1", "B2"]),
            &embedder,
        )
        .unwrap();
        assert_eq!(pairs, vec![AlignmentPair::new(0, 0), AlignmentPair::new(2, 1)]);
    }

    #[test]
    fn ties_go_to_lowest_target() {
        let sims = vec![vec![0.5, 0.9, 0.9], vec![0.9, 0.9, 0.1]];
        assert_eq!(
            greedy_match(&sims),
            vec![AlignmentPair::new(0, 1), AlignmentPair::new(1, 0)]
        );
    }

    #[test]
    fn argmax_over_all_targets() {
        // source 1 prefers target 0 (claimed) over the free target 1: it stays unmatched.
        let sims = vec![vec![0.9, 0.1], vec![0.8, 0.7]];
        assert_eq!(greedy_match(&sims), vec![AlignmentPair::new(0, 0)]);
    }

    #[test]
    fn injective_and_in_bounds() {
        let sims: Vec<Vec<f32>> = (0..20)
            .map(|i| (0..7).map(|j| ((i * 7 + j * 3) % 11) as f32).collect())
            .collect();
        let pairs = greedy_match(&sims);
        let targets: HashSet<usize> = pairs.iter().map(|p| p.target).collect();
        assert_eq!(targets.len(), pairs.len());
        assert!(pairs.iter().all(|p| p.source < 20 && p.target < 7));
        assert!(pairs.windows(2).all(|w| w[0].source < w[1].source));
    }

    #[test]
    fn cosine() {
        let m = cosine_matrix(&[vec![2.0, 0.0], vec![0.0, 0.0]], &[vec![1.0, 1.0], vec![3.0, 0.0]]);
        assert!((m[0][0] - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
        assert!((m[0][1] - 1.0).abs() < 1e-6);
        assert_eq!(m[1], vec![0.0, 0.0]);
    }

    #[test]
    fn embedding_failure_is_atomic() {
        let embedder = Lookup(vec![("A1", vec![1.0])].into_iter().collect());
        let r = align(&strings(&["A1"]), &strings(&["unknown"]), &embedder);
        assert!(matches!(r, Err(Error::Embedding(_))));
    }

    #[test]
    fn malformed_vectors() {
        let wrong_count = |s: &[String]| -> Result<Vec<Vec<f32>>, Error> {
            Ok(vec![vec![1.0]; s.len() + 1])
        };
        assert!(matches!(
            align(&strings(&["a"]), &strings(&["b"]), &wrong_count),
            Err(Error::Embedding(_))
        ));

        let ragged = |s: &[String]| -> Result<Vec<Vec<f32>>, Error> {
            Ok(s.iter().map(|s| vec![1.0; s.len()]).collect())
        };
        assert!(matches!(
            align(&strings(&["a"]), &strings(&["bb"]), &ragged),
            Err(Error::Embedding(_))
        ));

        let nan = |s: &[String]| -> Result<Vec<Vec<f32>>, Error> {
            Ok(vec![vec![f32::NAN]; s.len()])
        };
        assert!(matches!(
            align(&strings(&["a"]), &strings(&["b"]), &nan),
            Err(Error::Embedding(_))
        ));
    }

    #[test]
    fn empty_sequences() {
        let never = |_: &[String]| -> Result<Vec<Vec<f32>>, Error> {
            Err(Error::Embedding("should not be called".to_string()))
        };
        assert!(align(&[], &strings(&["b"]), &never).unwrap().is_empty());
    }

    #[test]
    fn resolve_out_of_bounds() {
        let src = strings(&["a"]);
        let tgt = strings(&["b"]);
        assert_eq!(AlignmentPair::new(0, 0).resolve(&src, &tgt).unwrap(), ("a", "b"));
        assert!(matches!(
            AlignmentPair::new(0, 3).resolve(&src, &tgt),
            Err(Error::OutOfBoundsAlignment { target: 3, .. })
        ));
    }
}
