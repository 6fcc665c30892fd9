//! Mesh export
//!
//! - Wavefront OBJ with per-vertex colors (`v x y z r g b`) and normals
//! - JSON dump of the four buffers
//! - Raw little-endian buffer files, one per attribute, for direct upload

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bytemuck::cast_slice;
use tracing::info;

use crate::buffers::MeshBuffers;
use crate::error::WormholeResult;

/// File names written by [`write_raw`]
pub const RAW_POSITIONS: &str = "positions.f32";
pub const RAW_NORMALS: &str = "normals.f32";
pub const RAW_COLORS: &str = "colors.f32";
pub const RAW_INDICES: &str = "indices.u32";

/// Output formats supported by [`save`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Obj,
    Json,
    /// Directory of raw buffer files
    Raw,
}

impl ExportFormat {
    /// Guess the format from a path's extension (`.obj`, `.json`); anything
    /// else is treated as a raw output directory
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("obj") => Self::Obj,
            Some("json") => Self::Json,
            _ => Self::Raw,
        }
    }
}

/// Write an OBJ file
///
/// Indices are 1-based in OBJ; every face references its vertex's normal.
pub fn write_obj<W: Write>(mesh: &MeshBuffers, w: &mut W, name: &str) -> WormholeResult<()> {
    writeln!(w, "# wormhole tunnel")?;
    writeln!(
        w,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(w, "o {}", name)?;

    for (p, c) in mesh
        .positions
        .chunks_exact(3)
        .zip(mesh.colors.chunks_exact(3))
    {
        writeln!(w, "v {} {} {} {} {} {}", p[0], p[1], p[2], c[0], c[1], c[2])?;
    }

    for n in mesh.normals.chunks_exact(3) {
        writeln!(w, "vn {} {} {}", n[0], n[1], n[2])?;
    }

    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }

    w.flush()?;
    Ok(())
}

/// Write the buffers as a JSON object
pub fn write_json<W: Write>(mesh: &MeshBuffers, w: &mut W) -> WormholeResult<()> {
    serde_json::to_writer(&mut *w, mesh)?;
    w.flush()?;
    Ok(())
}

/// Write each buffer to its own little-endian file inside `dir`
pub fn write_raw(mesh: &MeshBuffers, dir: &Path) -> WormholeResult<()> {
    std::fs::create_dir_all(dir)?;
    std::fs::write(dir.join(RAW_POSITIONS), le_bytes_f32(&mesh.positions))?;
    std::fs::write(dir.join(RAW_NORMALS), le_bytes_f32(&mesh.normals))?;
    std::fs::write(dir.join(RAW_COLORS), le_bytes_f32(&mesh.colors))?;
    std::fs::write(dir.join(RAW_INDICES), le_bytes_u32(&mesh.indices))?;
    Ok(())
}

/// Export to `path` in the given format, creating parent directories
pub fn save(mesh: &MeshBuffers, path: &Path, format: ExportFormat) -> WormholeResult<()> {
    match format {
        ExportFormat::Raw => write_raw(mesh, path)?,
        ExportFormat::Obj | ExportFormat::Json => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let mut w = BufWriter::new(File::create(path)?);
            if format == ExportFormat::Obj {
                let name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("wormhole");
                write_obj(mesh, &mut w, name)?;
            } else {
                write_json(mesh, &mut w)?;
            }
            w.flush()?;
        }
    }

    info!("Exported {:?} to {}", format, path.display());
    Ok(())
}

fn le_bytes_f32(values: &[f32]) -> Vec<u8> {
    if cfg!(target_endian = "little") {
        cast_slice(values).to_vec()
    } else {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }
}

fn le_bytes_u32(values: &[u32]) -> Vec<u8> {
    if cfg!(target_endian = "little") {
        cast_slice(values).to_vec()
    } else {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }
}
