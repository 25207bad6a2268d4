//! Wavefront OBJ parsing.
//!
//! Handles the record types this viewer consumes: `v`, `vt`, `vn`, `vp`,
//! `f`, and `#`. Element data is stored as flat float vectors with the
//! per-category arity fixed by the first record of that category, matching
//! the format's fixed-arity expectation. Face records keep their raw
//! 1-based (possibly negative, relative-to-end) index triples; faces with
//! more than three references are fan-triangulated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use super::AssetError;

/// One vertex reference from a face record, holding raw OBJ indices.
///
/// Indices are 1-based; negative values count back from the end of the
/// respective element list. Use [`resolve_index`] to turn one into a
/// 0-based offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceVertex {
    pub position: isize,
    pub tex_coord: Option<isize>,
    pub normal: Option<isize>,
}

/// A parsed OBJ model.
///
/// Element vectors are flat: a model with `vertex_arity == 3` stores its
/// vertices as `[x0, y0, z0, x1, y1, z1, ...]`. `faces` holds three
/// [`FaceVertex`] entries per emitted triangle.
#[derive(Debug, Clone, Default)]
pub struct ObjModel {
    pub filename: String,

    pub vertices: Vec<f32>,
    pub normals: Vec<f32>,
    pub tex_coords: Vec<f32>,
    pub param_vertices: Vec<f32>,
    pub faces: Vec<FaceVertex>,

    /// Components per `v` record (3 or 4), fixed by the first one seen.
    pub vertex_arity: usize,
    /// Components per `vt` record (2 or 3).
    pub tex_coord_arity: usize,
    /// Components per `vp` record (1 to 3).
    pub param_vertex_arity: usize,
    /// Components per face reference (1 to 3), from the first `f` record.
    pub face_arity: usize,

    pub is_loaded: bool,
    pub bad_file: bool,
}

impl ObjModel {
    /// Parses the OBJ file at `path`.
    ///
    /// An unopenable path yields [`AssetError::Io`]; a record with missing
    /// or non-numeric components yields [`AssetError::MalformedLine`].
    /// Unknown keywords are skipped with a debug diagnostic.
    pub fn load(path: impl AsRef<Path>) -> Result<ObjModel, AssetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut model = ObjModel {
            filename: path.display().to_string(),
            ..ObjModel::default()
        };

        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|source| AssetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let line_no = idx + 1;

            let tokens: Vec<&str> = line.split_whitespace().collect();
            let Some((&keyword, values)) = tokens.split_first() else {
                continue;
            };

            let malformed = || AssetError::MalformedLine {
                path: path.to_path_buf(),
                line_no,
                keyword: keyword.to_string(),
                line: line.clone(),
            };

            match keyword {
                "v" => {
                    let arity = fix_arity(&mut model.vertex_arity, values.len(), 3..=4)
                        .ok_or_else(malformed)?;
                    if values.len() > arity {
                        warn!(
                            "{}:{}: 'v' record has {} components, keeping first {}",
                            path.display(),
                            line_no,
                            values.len(),
                            arity
                        );
                    }
                    parse_floats(&values[..arity], &mut model.vertices).ok_or_else(malformed)?;
                }
                "vt" => {
                    let arity = fix_arity(&mut model.tex_coord_arity, values.len(), 2..=3)
                        .ok_or_else(malformed)?;
                    parse_floats(&values[..arity], &mut model.tex_coords).ok_or_else(malformed)?;
                }
                "vn" => {
                    if values.len() < 3 {
                        return Err(malformed());
                    }
                    parse_floats(&values[..3], &mut model.normals).ok_or_else(malformed)?;
                }
                "vp" => {
                    let arity = fix_arity(&mut model.param_vertex_arity, values.len(), 1..=3)
                        .ok_or_else(malformed)?;
                    parse_floats(&values[..arity], &mut model.param_vertices)
                        .ok_or_else(malformed)?;
                }
                "f" => {
                    if values.len() < 3 {
                        return Err(malformed());
                    }
                    let mut refs = Vec::with_capacity(values.len());
                    for value in values {
                        refs.push(parse_face_vertex(value).ok_or_else(malformed)?);
                    }
                    if model.face_arity == 0 {
                        model.face_arity = face_component_count(values[0]);
                    }
                    // Fan triangulation around the first reference.
                    for window in refs.windows(2).skip(1) {
                        model.faces.push(refs[0]);
                        model.faces.push(window[0]);
                        model.faces.push(window[1]);
                    }
                }
                "#" => {}
                _ => {
                    debug!(
                        "{}:{}: skipping unsupported record '{}'",
                        path.display(),
                        line_no,
                        keyword
                    );
                }
            }
        }

        model.is_loaded = true;
        model.bad_file = false;
        debug!(
            "{}: arities v={} vt={} vp={} f={}",
            model.filename,
            model.vertex_arity,
            model.tex_coord_arity,
            model.param_vertex_arity,
            model.face_arity
        );
        Ok(model)
    }

    /// Number of `v` records parsed.
    pub fn vertex_count(&self) -> usize {
        match self.vertex_arity {
            0 => 0,
            arity => self.vertices.len() / arity,
        }
    }

    /// Number of `vn` records parsed.
    pub fn normal_count(&self) -> usize {
        self.normals.len() / 3
    }

    /// Number of triangles emitted from face records.
    pub fn triangle_count(&self) -> usize {
        self.faces.len() / 3
    }
}

/// Maps a raw 1-based OBJ index to a 0-based offset into a list of `count`
/// elements. Negative indices count back from the end of the list.
pub fn resolve_index(index: isize, count: usize) -> Result<usize, AssetError> {
    let out_of_range = AssetError::IndexOutOfRange { index, count };
    if index > 0 {
        let resolved = index as usize - 1;
        if resolved < count {
            Ok(resolved)
        } else {
            Err(out_of_range)
        }
    } else if index < 0 {
        let back = index.unsigned_abs();
        count.checked_sub(back).ok_or(out_of_range)
    } else {
        Err(out_of_range)
    }
}

/// Fixes a category's arity on first use and validates later records
/// against it. Returns `None` when the record is too short or the first
/// record's component count falls outside `legal`.
fn fix_arity(
    arity: &mut usize,
    components: usize,
    legal: std::ops::RangeInclusive<usize>,
) -> Option<usize> {
    if *arity == 0 {
        if !legal.contains(&components) {
            return None;
        }
        *arity = components;
    }
    if components < *arity {
        return None;
    }
    Some(*arity)
}

fn parse_floats(values: &[&str], out: &mut Vec<f32>) -> Option<()> {
    let start = out.len();
    for value in values {
        match value.parse::<f32>() {
            Ok(v) => out.push(v),
            Err(_) => {
                out.truncate(start);
                return None;
            }
        }
    }
    Some(())
}

fn parse_face_vertex(value: &str) -> Option<FaceVertex> {
    let mut parts = value.split('/');
    let position = parts.next()?.parse::<isize>().ok()?;

    let optional = |raw: Option<&str>| -> Option<Option<isize>> {
        match raw {
            None | Some("") => Some(None),
            Some(text) => text.parse::<isize>().ok().map(Some),
        }
    };
    let tex_coord = optional(parts.next())?;
    let normal = optional(parts.next())?;

    if parts.next().is_some() {
        return None;
    }
    Some(FaceVertex {
        position,
        tex_coord,
        normal,
    })
}

fn face_component_count(value: &str) -> usize {
    value.split('/').filter(|part| !part.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_obj(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn vertex_arity_fixed_by_first_record() {
        // Second record has an extra component; the arity stays 3 and the
        // extra value is ignored.
        let file = write_obj("v 1 2 3\nv 4 5 6 7\n");
        let model = ObjModel::load(file.path()).unwrap();

        assert_eq!(model.vertex_arity, 3);
        assert_eq!(model.vertex_count(), 2);
        assert_eq!(model.vertices, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn four_component_vertices_keep_w() {
        let file = write_obj("v 1 2 3 0.5\nv 4 5 6 1.0\n");
        let model = ObjModel::load(file.path()).unwrap();

        assert_eq!(model.vertex_arity, 4);
        assert_eq!(model.vertices.len(), 8);
        assert_eq!(model.vertices[3], 0.5);
    }

    #[test]
    fn short_vertex_record_is_malformed() {
        let file = write_obj("v 1 2 3\nv 4 5\n");
        let err = ObjModel::load(file.path()).unwrap_err();
        assert!(matches!(err, AssetError::MalformedLine { line_no: 2, .. }));
    }

    #[test]
    fn non_numeric_component_is_malformed() {
        let file = write_obj("v 1 2 banana\n");
        let err = ObjModel::load(file.path()).unwrap_err();
        assert!(matches!(err, AssetError::MalformedLine { line_no: 1, .. }));
    }

    #[test]
    fn tex_coord_third_component_reads_third_token() {
        let file = write_obj("vt 0.25 0.5 0.75\n");
        let model = ObjModel::load(file.path()).unwrap();

        assert_eq!(model.tex_coord_arity, 3);
        assert_eq!(model.tex_coords, vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn normals_are_three_components() {
        let file = write_obj("vn 0 0 1\nvn 0 1 0\n");
        let model = ObjModel::load(file.path()).unwrap();

        assert_eq!(model.normal_count(), 2);
        assert_eq!(model.normals, vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn param_vertex_arity_fixed_by_first_record() {
        let file = write_obj("vp 0.5 1.0\nvp 2.0 3.0\n");
        let model = ObjModel::load(file.path()).unwrap();

        assert_eq!(model.param_vertex_arity, 2);
        assert_eq!(model.param_vertices, vec![0.5, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn short_param_vertex_record_is_malformed() {
        let file = write_obj("vp 0.5 1.0\nvp 2.0\n");
        let err = ObjModel::load(file.path()).unwrap_err();
        assert!(matches!(err, AssetError::MalformedLine { line_no: 2, .. }));
    }

    #[test]
    fn triangle_face_is_stored() {
        let file = write_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/2/2 3/3/3\n");
        let model = ObjModel::load(file.path()).unwrap();

        assert_eq!(model.face_arity, 3);
        assert_eq!(model.triangle_count(), 1);
        assert_eq!(
            model.faces[1],
            FaceVertex {
                position: 2,
                tex_coord: Some(2),
                normal: Some(2),
            }
        );
    }

    #[test]
    fn position_only_and_position_normal_references() {
        let file = write_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
        let model = ObjModel::load(file.path()).unwrap();
        assert_eq!(model.face_arity, 1);
        assert_eq!(model.faces[0].tex_coord, None);
        assert_eq!(model.faces[0].normal, None);

        let file = write_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n");
        let model = ObjModel::load(file.path()).unwrap();
        assert_eq!(model.face_arity, 2);
        assert_eq!(model.faces[0].tex_coord, None);
        assert_eq!(model.faces[0].normal, Some(1));
    }

    #[test]
    fn quad_face_is_fan_triangulated() {
        let file = write_obj("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n");
        let model = ObjModel::load(file.path()).unwrap();

        assert_eq!(model.triangle_count(), 2);
        let positions: Vec<isize> = model.faces.iter().map(|f| f.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 1, 3, 4]);
    }

    #[test]
    fn face_with_two_references_is_malformed() {
        let file = write_obj("v 0 0 0\nv 1 0 0\nf 1 2\n");
        let err = ObjModel::load(file.path()).unwrap_err();
        assert!(matches!(err, AssetError::MalformedLine { .. }));
    }

    #[test]
    fn comments_and_unknown_keywords_are_skipped() {
        let file = write_obj("# a comment\nmtllib cube.mtl\no cube\nv 1 2 3\ns off\n");
        let model = ObjModel::load(file.path()).unwrap();

        assert!(model.is_loaded);
        assert_eq!(model.vertex_count(), 1);
    }

    #[test]
    fn unopenable_path_is_an_io_error() {
        let err = ObjModel::load("/nonexistent/model.obj").unwrap_err();
        assert!(matches!(err, AssetError::Io { .. }));
    }

    #[test]
    fn resolve_index_handles_one_based_and_negative() {
        assert_eq!(resolve_index(1, 4).unwrap(), 0);
        assert_eq!(resolve_index(4, 4).unwrap(), 3);
        assert_eq!(resolve_index(-1, 4).unwrap(), 3);
        assert_eq!(resolve_index(-4, 4).unwrap(), 0);
        assert!(resolve_index(5, 4).is_err());
        assert!(resolve_index(-5, 4).is_err());
        assert!(resolve_index(0, 4).is_err());
    }
}
