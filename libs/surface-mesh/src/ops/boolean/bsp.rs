//! # BSP Tree
//!
//! Binary space partitioning tree for solid boolean operations, after the
//! csg.js algorithm by Evan Wallace.
//!
//! Each node holds a splitting plane, the polygons lying in it, and optional
//! front and back subtrees. Nodes live in one arena vector and refer to their
//! children by index, so every traversal below is a loop over an explicit
//! work stack. Convex inputs produce trees as deep as they have facets.

use super::plane::Plane;
use super::polygon::{Polygon, Split};

#[derive(Debug, Clone, Default)]
struct Node {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<usize>,
    back: Option<usize>,
}

/// A BSP tree describing a solid.
///
/// # Example
///
/// ```rust,ignore
/// let tree = BspTree::new(mesh_to_polygons(&mesh));
/// ```
#[derive(Debug, Clone)]
pub struct BspTree {
    nodes: Vec<Node>,
}

impl BspTree {
    /// Builds a tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut tree = Self {
            nodes: vec![Node::default()],
        };
        tree.build(polygons);
        tree
    }

    /// Inserts polygons into the tree, splitting them along existing planes.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack = vec![(0usize, polygons)];
        while let Some((index, polys)) = stack.pop() {
            let mut polys = polys.into_iter();
            let plane = match self.nodes[index].plane {
                Some(plane) => plane,
                None => match polys.next() {
                    Some(first) => {
                        let plane = *first.plane();
                        let node = &mut self.nodes[index];
                        node.plane = Some(plane);
                        node.polygons.push(first);
                        plane
                    }
                    None => continue,
                },
            };

            let mut split = Split::default();
            for poly in polys {
                poly.split(&plane, &mut split);
            }
            let node = &mut self.nodes[index];
            node.polygons.append(&mut split.coplanar_front);
            node.polygons.append(&mut split.coplanar_back);

            if !split.front.is_empty() {
                let child = self.child(index, true);
                stack.push((child, split.front));
            }
            if !split.back.is_empty() {
                let child = self.child(index, false);
                stack.push((child, split.back));
            }
        }
    }

    fn child(&mut self, index: usize, front: bool) -> usize {
        let existing = if front {
            self.nodes[index].front
        } else {
            self.nodes[index].back
        };
        if let Some(child) = existing {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(Node::default());
        if front {
            self.nodes[index].front = Some(child);
        } else {
            self.nodes[index].back = Some(child);
        }
        child
    }

    /// Turns the solid inside out.
    pub fn invert(&mut self) {
        for node in &mut self.nodes {
            for poly in &mut node.polygons {
                poly.flip();
            }
            node.plane = node.plane.map(|plane| plane.flip());
            std::mem::swap(&mut node.front, &mut node.back);
        }
    }

    /// Removes the parts of `polygons` that lie inside this solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![(0usize, polygons)];
        while let Some((index, polys)) = stack.pop() {
            let node = &self.nodes[index];
            let Some(plane) = node.plane else {
                result.extend(polys);
                continue;
            };

            let mut split = Split::default();
            for poly in polys {
                poly.split(&plane, &mut split);
            }
            let mut front = split.front;
            front.append(&mut split.coplanar_front);
            let mut back = split.back;
            back.append(&mut split.coplanar_back);

            match node.front {
                Some(child) => stack.push((child, front)),
                None => result.extend(front),
            }
            // behind a leaf plane is inside the solid
            if let Some(child) = node.back {
                stack.push((child, back));
            }
        }
        result
    }

    /// Removes the parts of this tree's polygons that lie inside `other`.
    pub fn clip_to(&mut self, other: &BspTree) {
        for node in &mut self.nodes {
            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons));
        }
    }

    pub fn all_polygons(&self) -> Vec<Polygon> {
        self.nodes
            .iter()
            .flat_map(|node| node.polygons.iter().cloned())
            .collect()
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.nodes.into_iter().flat_map(|node| node.polygons).collect()
    }

    pub fn polygon_count(&self) -> usize {
        self.nodes.iter().map(|node| node.polygons.len()).sum()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        if self.nodes[0].plane.is_none() {
            return 0;
        }
        let mut max_depth = 0;
        let mut stack = vec![(0usize, 1usize)];
        while let Some((index, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[index];
            for child in [node.front, node.back].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspTree::new(vec![]);
        assert_eq!(tree.polygon_count(), 0);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_bsp_new_multiple() {
        let tree = BspTree::new(vec![triangle(0.0), triangle(1.0), triangle(-1.0)]);
        assert_eq!(tree.polygon_count(), 3);
        assert_eq!(tree.all_polygons().len(), 3);
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn test_coplanar_polygons_share_node() {
        let tree = BspTree::new(vec![triangle(0.0), triangle(0.0)]);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.polygon_count(), 2);
    }

    #[test]
    fn test_bsp_invert() {
        let mut tree = BspTree::new(vec![triangle(0.0)]);
        tree.invert();
        let normal = tree.all_polygons()[0].plane().normal();
        assert!((normal + DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_bsp_clip_polygons() {
        let tree = BspTree::new(vec![triangle(0.0)]);
        assert_eq!(tree.clip_polygons(vec![triangle(1.0)]).len(), 1);
        assert!(tree.clip_polygons(vec![triangle(-1.0)]).is_empty());
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        // stacked planes facing up build a chain of back children
        let polys: Vec<Polygon> = (0..3_000).map(|i| triangle(-f64::from(i))).collect();
        let tree = BspTree::new(polys);
        assert_eq!(tree.depth(), 3_000);
        let clipped = tree.clip_polygons(vec![triangle(0.5)]);
        assert_eq!(clipped.len(), 1);
    }
}
