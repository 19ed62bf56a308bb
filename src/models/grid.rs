use super::BitMatrix;

/// State of a single cell while a symbol is being assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not yet written
    #[default]
    Unset,
    /// Light data module
    Light,
    /// Dark data module
    Dark,
    /// Light module belonging to a function pattern
    FunctionLight,
    /// Dark module belonging to a function pattern
    FunctionDark,
}

impl Module {
    /// True for dark modules, data or function
    pub fn is_dark(self) -> bool {
        matches!(self, Module::Dark | Module::FunctionDark)
    }

    /// True for finder/timing/alignment/format/version cells
    pub fn is_function(self) -> bool {
        matches!(self, Module::FunctionLight | Module::FunctionDark)
    }

    /// Function module of the given color
    pub fn function(dark: bool) -> Self {
        if dark {
            Module::FunctionDark
        } else {
            Module::FunctionLight
        }
    }

    /// Data module of the given color
    pub fn data(dark: bool) -> Self {
        if dark { Module::Dark } else { Module::Light }
    }

    /// Same kind of module with the color inverted; `Unset` stays unset
    pub fn flipped(self) -> Self {
        match self {
            Module::Unset => Module::Unset,
            Module::Light => Module::Dark,
            Module::Dark => Module::Light,
            Module::FunctionLight => Module::FunctionDark,
            Module::FunctionDark => Module::FunctionLight,
        }
    }
}

/// Square grid of modules, addressed as (x = column, y = row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<Module>,
}

impl ModuleGrid {
    /// Create a grid with every cell `Unset`
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Module::Unset; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Module {
        self.cells[y * self.size + x]
    }

    /// Overwrite the module at column `x`, row `y`
    pub fn set(&mut self, x: usize, y: usize, module: Module) {
        self.cells[y * self.size + x] = module;
    }

    /// Write a function module at (x, y)
    pub fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.set(x, y, Module::function(dark));
    }

    /// Color at column `x`, row `y`
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    /// True for function-pattern and reserved cells
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_function()
    }

    /// Number of dark modules in the grid
    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|m| m.is_dark()).count()
    }

    /// Number of cells still `Unset`
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|m| **m == Module::Unset).count()
    }

    /// Colors of row `y`, left to right
    pub fn row(&self, y: usize) -> impl Iterator<Item = bool> + '_ {
        self.cells[y * self.size..(y + 1) * self.size]
            .iter()
            .map(|m| m.is_dark())
    }

    /// Colors of column `x`, top to bottom
    pub fn column(&self, x: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.size).map(move |y| self.is_dark(x, y))
    }

    /// Export the colors as a packed bit matrix (dark = 1)
    pub fn to_bit_matrix(&self) -> BitMatrix {
        let mut matrix = BitMatrix::new(self.size, self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                if self.is_dark(x, y) {
                    matrix.set(x, y, true);
                }
            }
        }
        matrix
    }
}
