//! Wavefront OBJ export.
//!
//! OBJ is a simple, widely-supported text-based 3D format.
//! Each texture slot becomes its own material.

use crate::error::{MesherError, Result};
use crate::mesher::Mesh;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Export a mesh to OBJ format.
/// Returns (obj_content, mtl_content) as strings.
pub fn export_obj(mesh: &Mesh, name: &str) -> Result<(String, String)> {
    // Pre-size buffers: ~60 bytes per vertex line (v/vt/vn) x 3 + ~40 per face
    let mut obj = String::with_capacity(256 + mesh.vertex_count() * 180 + mesh.triangle_count() * 40);
    let mut mtl = String::with_capacity(512);

    write_obj(&mut obj, mesh, name).map_err(|e| MesherError::Export(e.to_string()))?;
    write_mtl(&mut mtl, mesh, name).map_err(|e| MesherError::Export(e.to_string()))?;

    Ok((obj, mtl))
}

fn material_name(name: &str, slot: u8) -> String {
    format!("{}_tex{}", name, slot)
}

fn write_obj(obj: &mut String, mesh: &Mesh, name: &str) -> std::fmt::Result {
    writeln!(obj, "# Chest Mesher OBJ Export")?;
    writeln!(obj, "# Vertices: {}", mesh.vertex_count())?;
    writeln!(obj, "# Triangles: {}", mesh.triangle_count())?;
    writeln!(obj)?;

    writeln!(obj, "mtllib {}.mtl", name)?;
    writeln!(obj)?;
    writeln!(obj, "o {}", name)?;
    writeln!(obj)?;

    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.position;
        writeln!(obj, "v {} {} {}", x, y, z)?;
    }
    writeln!(obj)?;

    for vertex in &mesh.vertices {
        writeln!(obj, "vt {} {}", vertex.uv[0], vertex.uv[1])?;
    }
    writeln!(obj)?;

    for vertex in &mesh.vertices {
        let [x, y, z] = vertex.normal;
        writeln!(obj, "vn {} {} {}", x, y, z)?;
    }

    // Faces grouped by texture slot
    for texture in mesh.used_textures() {
        writeln!(obj)?;
        writeln!(obj, "usemtl {}", material_name(name, texture.get()))?;
        for (triangle, _) in mesh
            .triangle_textures
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == texture)
        {
            let base = triangle * 3;
            let i0 = mesh.indices[base] as usize + 1;
            let i1 = mesh.indices[base + 1] as usize + 1;
            let i2 = mesh.indices[base + 2] as usize + 1;
            writeln!(
                obj,
                "f {}/{}/{} {}/{}/{} {}/{}/{}",
                i0, i0, i0, i1, i1, i1, i2, i2, i2
            )?;
        }
    }
    Ok(())
}

fn write_mtl(mtl: &mut String, mesh: &Mesh, name: &str) -> std::fmt::Result {
    writeln!(mtl, "# Chest Mesher Materials")?;

    for texture in mesh.used_textures() {
        let material = material_name(name, texture.get());
        writeln!(mtl)?;
        writeln!(mtl, "newmtl {}", material)?;
        writeln!(mtl, "Ka 1.0 1.0 1.0")?;
        writeln!(mtl, "Kd 1.0 1.0 1.0")?;
        writeln!(mtl, "Ks 0.0 0.0 0.0")?;
        writeln!(mtl, "Ns 10.0")?;
        writeln!(mtl, "d 1.0")?;
        writeln!(mtl, "illum 1")?;
        writeln!(mtl, "map_Kd {}.png", material)?;
    }
    Ok(())
}

/// OBJ and MTL content ready to be written to disk.
pub struct ObjExport {
    pub name: String,
    pub obj: String,
    pub mtl: String,
}

impl ObjExport {
    pub fn from_mesh(mesh: &Mesh, name: &str) -> Result<Self> {
        let (obj, mtl) = export_obj(mesh, name)?;
        Ok(Self {
            name: name.to_string(),
            obj,
            mtl,
        })
    }

    /// Write `<name>.obj` and `<name>.mtl` into `dir`. Returns the OBJ path.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let obj_path = dir.join(format!("{}.obj", self.name));
        std::fs::write(&obj_path, &self.obj)?;
        std::fs::write(dir.join(format!("{}.mtl", self.name)), &self.mtl)?;
        Ok(obj_path)
    }
}
